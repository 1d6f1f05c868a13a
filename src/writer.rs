use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::Result;
use crate::models::JobRecord;

/// Builds `{prefix}-{timestamp}.json`, the run timestamp normalized for
/// filenames: ISO-8601 UTC with `:` and `.` replaced by `-`. Stays lexically
/// sortable, and a fresh stamp per run means earlier dumps are never
/// overwritten.
pub fn timestamped_filename(prefix: &str, at: DateTime<Utc>) -> String {
    let stamp = at
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-");
    format!("{prefix}-{stamp}.json")
}

/// Writes the complete record sequence in one shot, pretty-printed UTF-8.
pub fn save_to_json(records: &[JobRecord], prefix: &str, at: DateTime<Utc>) -> Result<PathBuf> {
    let path = PathBuf::from(timestamped_filename(prefix, at));
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json)?;
    Ok(path)
}
