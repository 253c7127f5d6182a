//! Option & configuration values for the distance calculation.
//!
//! These are plain owned values. Build a fresh one per call (`Default` gives
//! the documented defaults), rather than sharing one mutable instance
//! between call sites.
use serde::{Deserialize, Serialize};

/// Caller options: output unit and accumulation mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Output unit, one of [`crate::units::SUPPORTED_UNITS`]. Default "meters".
    pub units: String,

    /// false: every row carries the running total of distance from row 0.
    /// true: rows with a NaN id carry the distance since the last real row,
    /// all other rows carry 0.
    pub relative: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            units: "meters".to_string(),
            relative: false,
        }
    }
}

/// Calculation configuration: method, column name mapping, and output
/// precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Only "haversine" is supported.
    pub method: String,

    pub column_names: ColumnNames,

    /// Rounding for derived columns. There is no default: leaving this unset
    /// is a configuration error at calculation time.
    pub precision: Option<Precision>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            method: "haversine".to_string(),
            column_names: ColumnNames::default(),
            precision: None,
        }
    }
}

/// Which physical column holds each of the logical roles the calculation
/// uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Latitude, in degrees.
    #[serde(rename = "LAT")]
    pub lat: String,

    /// Longitude, in degrees.
    #[serde(rename = "LON")]
    pub lon: String,

    /// Sample identifier. NaN here marks a synthetic gap row with no real
    /// predecessor.
    #[serde(rename = "ID")]
    pub id: String,

    /// Output column the computed distances are written to.
    #[serde(rename = "DIST")]
    pub dist: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            lat: "latitude".to_string(),
            lon: "longitude".to_string(),
            id: "id".to_string(),
            dist: "distance".to_string(),
        }
    }
}

/// Decimal places to round each derived output column to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Precision {
    pub distance: i32,
}
