use thiserror::Error;

/// Ways the distance calculation can fail.
///
/// Every variant is a configuration or input problem the caller has to fix.
/// Nothing is retried and the table is never partially written: an error
/// means the table is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// The table is missing at least one of the three mapped input columns.
    #[error(
        "distance calculation requires the '{lat}' (LAT), '{lon}' (LON) and '{id}' (ID) columns"
    )]
    MissingColumns {
        lat: String,
        lon: String,
        id: String,
    },

    #[error("method '{0}' is not recognized")]
    UnknownMethod(String),

    #[error("unit '{0}' is not recognized")]
    UnknownUnit(String),

    /// `precision.distance` was not configured. A separate kind from
    /// [`DistanceError::UnknownUnit`] so the two are diagnosable apart.
    #[error("no distance precision configured (output unit '{units}')")]
    MissingPrecision { units: String },
}
