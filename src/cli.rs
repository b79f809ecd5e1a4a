//! Command-line interface parsing for skycard
//!
//! This module handles parsing of CLI arguments using clap, including the
//! snapshot file and per-field overrides that make up the weather data
//! bound into the card at startup.

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::Parser;
use thiserror::Error;

use crate::data::{snapshot, SnapshotError, WeatherSnapshot};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The time text does not parse as 24-hour HH:MM
    #[error("Invalid time: '{0}'. Expected 24-hour HH:MM, e.g. 06:12")]
    InvalidTime(String),

    /// The snapshot file could not be loaded
    #[error("Failed to load snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Skycard - a collapsible weather card in your terminal
#[derive(Parser, Debug)]
#[command(name = "skycard")]
#[command(about = "Collapsible weather card with sunrise, sunset, and temperature details")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Load the weather snapshot from a JSON file
    ///
    /// The file holds one object with sunrise, sunset, high_celsius, and
    /// low_celsius fields. Field flags below override file values.
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Sunrise time override (24-hour HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub sunrise: Option<String>,

    /// Sunset time override (24-hour HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub sunset: Option<String>,

    /// High temperature override in Celsius
    #[arg(long, value_name = "CELSIUS")]
    pub high: Option<f64>,

    /// Low temperature override in Celsius
    #[arg(long, value_name = "CELSIUS")]
    pub low: Option<f64>,

    /// Start with the detail rows visible
    #[arg(long)]
    pub expanded: bool,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// The snapshot bound into the card at startup
    pub snapshot: WeatherSnapshot,
    /// Whether the card starts expanded
    pub start_expanded: bool,
}

/// Validates an HH:MM time argument, returning it as display text.
///
/// # Arguments
/// * `s` - The time string from CLI
///
/// # Returns
/// * `Ok(String)` with the text unchanged if it parses as 24-hour HH:MM
/// * `Err(CliError::InvalidTime)` otherwise
pub fn parse_time_arg(s: &str) -> Result<String, CliError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(|_| s.to_string())
        .map_err(|_| CliError::InvalidTime(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// Resolution order: the snapshot file if given, otherwise the built-in
    /// sample; individual field flags override either.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the resolved snapshot
    /// * `Err(CliError)` if the file fails to load or a time is malformed
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut snap = match &cli.snapshot {
            Some(path) => snapshot::load(path)?,
            None => snapshot::sample(),
        };

        if let Some(sunrise) = &cli.sunrise {
            snap.sunrise = parse_time_arg(sunrise)?;
        }
        if let Some(sunset) = &cli.sunset {
            snap.sunset = parse_time_arg(sunset)?;
        }
        if let Some(high) = cli.high {
            snap.high_celsius = high;
        }
        if let Some(low) = cli.low {
            snap.low_celsius = low;
        }

        Ok(StartupConfig {
            snapshot: snap,
            start_expanded: cli.expanded,
        })
    }
}
