use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::{debug, instrument};

use crate::model::grouped::GroupedMatches;
use crate::model::match_record::MatchRecord;

/// Partition matches into yesterday/today/tomorrow buckets relative to the
/// calendar date of `now_utc` in the given timezone. Classification is by
/// calendar date only; matches outside the three-day window are dropped.
/// Bucket order preserves the supplied order.
///
/// Accepts a specific current time `now_utc` to make this function easier to
/// test; regular callers pass `chrono::Utc::now()`.
#[instrument(level = "info", skip(matches), fields(count = matches.len()))]
pub fn group(
    matches: Vec<MatchRecord>,
    timezone: &str,
    now_utc: DateTime<Utc>,
) -> Result<GroupedMatches, String> {
    let tz: Tz = timezone
        .parse()
        .map_err(|e| format!("Unknown timezone {}: {}", timezone, e))?;

    let reference = now_utc.with_timezone(&tz);
    let today = reference.date_naive();

    let mut grouped = GroupedMatches {
        yesterday: Vec::new(),
        today: Vec::new(),
        tomorrow: Vec::new(),
        generated_at: reference.fixed_offset(),
    };

    for record in matches {
        let match_date = record.date.with_timezone(&tz).date_naive();
        if match_date == today {
            grouped.today.push(record);
        } else if match_date == today - Duration::days(1) {
            grouped.yesterday.push(record);
        } else if match_date == today + Duration::days(1) {
            grouped.tomorrow.push(record);
        } else {
            debug!(date = %record.date, "Dropping match outside the day window");
        }
    }

    Ok(grouped)
}
