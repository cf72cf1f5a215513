use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::model::match_record::MatchRecord;

/// Output document: one bucket per calendar day relative to the configured
/// timezone. Field order is the published JSON field order.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupedMatches {
    pub yesterday: Vec<MatchRecord>,
    pub today: Vec<MatchRecord>,
    pub tomorrow: Vec<MatchRecord>,
    pub generated_at: DateTime<FixedOffset>,
}
