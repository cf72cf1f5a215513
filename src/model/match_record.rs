use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One fixture pulled from the page. `score` holds the literal "vs" when the
/// event block carries no score element (the page's way of marking a match
/// that has not been played yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: DateTime<FixedOffset>,
    pub home: String,
    pub away: String,
    pub score: String,
}
