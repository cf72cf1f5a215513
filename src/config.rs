use std::path::Path;

use serde::Deserialize;

/// Run configuration, read once from the JSON file passed via `--config`.
/// `timezone` is resolved later by the grouper; here it is just a string.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub wikipedia_page: String,
    pub timezone: String,
}

impl Config {
    /// Load configuration from a JSON file. A missing file or malformed JSON
    /// is fatal for the run.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_json(&raw)
    }

    /// Parse configuration from a raw JSON string (no filesystem access).
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse config JSON: {}", e))
    }
}
