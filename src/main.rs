use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use matchday_scraper::config::Config;
use matchday_scraper::grouper;
use matchday_scraper::wikipedia::Wikipedia;

#[derive(Parser, Debug)]
#[command(
    name = "matchday-scraper",
    about = "Scrape a Wikipedia fixtures page and bucket matches by day"
)]
struct Args {
    /// Path to the JSON config file (fields: wikipedia_page, timezone)
    #[arg(long)]
    config: PathBuf,

    /// Destination path for the grouped matches JSON (overwritten)
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_file(&args.config)?;

    // A failed fetch is "zero matches found", not a fatal error; the run
    // still produces a valid output file with empty buckets.
    let matches = Wikipedia::for_page(&config.wikipedia_page).into_matches();
    info!(count = matches.len(), "Fetched matches");

    let grouped = grouper::group(matches, &config.timezone, chrono::Utc::now())?;
    info!(
        yesterday = grouped.yesterday.len(),
        today = grouped.today.len(),
        tomorrow = grouped.tomorrow.len(),
        "Grouped matches by day"
    );

    // Written once, only after grouping succeeded; an earlier fatal error
    // leaves any previous file untouched.
    let json = serde_json::to_string_pretty(&grouped)?;
    std::fs::write(&args.output, json)?;
    info!(path = %args.output.display(), "Saved grouped matches");

    Ok(())
}
