//! Snapshot file loading
//!
//! Reads a [`WeatherSnapshot`] from a JSON file supplied on the command
//! line, and provides the built-in sample used when no source is given.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::WeatherSnapshot;

/// Errors that can occur when loading a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be read
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid snapshot
    #[error("failed to parse snapshot file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads a snapshot from a JSON file
///
/// # Arguments
/// * `path` - Path to a JSON file with sunrise, sunset, high_celsius, and
///   low_celsius fields
///
/// # Returns
/// * `Ok(WeatherSnapshot)` on success
/// * `Err(SnapshotError)` if the file cannot be read or parsed
pub fn load(path: &Path) -> Result<WeatherSnapshot, SnapshotError> {
    let content = fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&content)?;
    Ok(snapshot)
}

/// Built-in sample snapshot used when no data source is given
pub fn sample() -> WeatherSnapshot {
    WeatherSnapshot {
        sunrise: "06:12".to_string(),
        sunset: "18:40".to_string(),
        high_celsius: 25.0,
        low_celsius: 14.0,
    }
}
