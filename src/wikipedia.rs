use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, info_span, instrument};

use crate::model::match_record::MatchRecord;

/// Why a single event block was dropped during extraction. Only the date can
/// fail a block; every other field degrades to a default instead.
#[derive(Debug)]
pub enum ExtractionError {
    MissingDate,
    UnparsableDate(String),
}

/// Match records extracted from one Wikipedia fixtures page.
///
/// The page marks each fixture as a `table.vevent` event block with a
/// machine-readable date on `th.dtstart`, team names in `span.fn` elements
/// and an optional `td.score` cell.
#[derive(Debug)]
pub struct Wikipedia {
    matches: Vec<MatchRecord>,
}

impl Wikipedia {
    /// Fetch the page and extract whatever matches it contains.
    ///
    /// Network, HTTP-status and body-read failures are logged and yield an
    /// empty match list; the caller is expected to carry on and produce an
    /// empty-but-valid output either way.
    #[instrument(level = "info", skip(url))]
    pub fn for_page(url: &str) -> Self {
        info!(url = %url, "Fetching matches from Wikipedia page");
        let response_result = {
            let _span = info_span!("wikipedia_fetch", url = %url).entered();
            ureq::get(url).call()
        };
        match response_result {
            Ok(response) => {
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => Self::from_html(&body),
                    Err(e) => {
                        error!(error = %e, url = %url, "Failed to read Wikipedia response body");
                        Self { matches: Vec::new() }
                    }
                }
            }
            Err(e) => {
                error!(error = %e, url = %url, "Error fetching Wikipedia page");
                Self { matches: Vec::new() }
            }
        }
    }

    /// Extract matches from raw page markup (no network).
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);

        let event_selector = Selector::parse("table.vevent").unwrap();
        let date_selector = Selector::parse("th.dtstart").unwrap();
        let team_selector = Selector::parse("span.fn").unwrap();
        let score_selector = Selector::parse("td.score").unwrap();

        let mut matches = Vec::new();
        for event in document.select(&event_selector) {
            match extract_match(event, &date_selector, &team_selector, &score_selector) {
                Ok(record) => matches.push(record),
                // A block that cannot produce a dated record is skipped
                // whole; no partial records.
                Err(e) => debug!(error = ?e, "Skipping event block"),
            }
        }

        debug!(count = matches.len(), "Extracted matches from page markup");
        Self { matches }
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<MatchRecord> {
        self.matches
    }
}

/// Pull one match out of a single event block, in document order of the
/// sub-elements. Absent team spans become empty strings and an absent score
/// cell becomes the "vs" placeholder.
fn extract_match(
    event: ElementRef,
    date_selector: &Selector,
    team_selector: &Selector,
    score_selector: &Selector,
) -> Result<MatchRecord, ExtractionError> {
    let raw_date = event
        .select(date_selector)
        .next()
        .and_then(|th| th.value().attr("title"))
        .ok_or(ExtractionError::MissingDate)?;
    let date = parse_event_date(raw_date)
        .ok_or_else(|| ExtractionError::UnparsableDate(raw_date.to_string()))?;

    let mut teams = event.select(team_selector);
    let home = teams.next().map(element_text).unwrap_or_default();
    let away = teams.next().map(element_text).unwrap_or_default();

    let score = event
        .select(score_selector)
        .next()
        .map(element_text)
        .unwrap_or_else(|| "vs".to_string());

    Ok(MatchRecord { date, home, away, score })
}

/// Parse the machine-readable event date from the `title` attribute.
/// Depending on the page template this is an RFC 3339 datetime, a datetime
/// without seconds, an offset-less datetime or a bare date; offset-less
/// forms are pinned to UTC so repeated runs agree on the instant.
fn parse_event_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z"))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)).fixed_offset())
        })
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
