//! Core data model for skycard
//!
//! Contains the weather snapshot type bound into the card presenter.
//! Snapshots are supplied from outside (CLI flags, a JSON file, or the
//! built-in sample); nothing in this crate fetches or produces them.

pub mod snapshot;

pub use snapshot::SnapshotError;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// An immutable weather payload for one presentation cycle
///
/// A snapshot is never mutated field-by-field once bound; data updates
/// replace it wholesale via [`CardPresenter::bind`](crate::card::CardPresenter::bind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Display-ready sunrise time text
    pub sunrise: String,
    /// Display-ready sunset time text
    pub sunset: String,
    /// Daily high temperature in Celsius
    pub high_celsius: f64,
    /// Daily low temperature in Celsius
    pub low_celsius: f64,
}

impl WeatherSnapshot {
    /// Builds a snapshot from parsed times, formatting them into the
    /// display-ready `HH:MM` text the card renders verbatim.
    pub fn from_times(
        sunrise: NaiveTime,
        sunset: NaiveTime,
        high_celsius: f64,
        low_celsius: f64,
    ) -> Self {
        Self {
            sunrise: sunrise.format("%H:%M").to_string(),
            sunset: sunset.format("%H:%M").to_string(),
            high_celsius,
            low_celsius,
        }
    }
}
