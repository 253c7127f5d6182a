//! Distance between consecutive positions in a [`GeoTable`].
//!
//! Walks the mapped latitude/longitude columns in row order and writes a
//! distance column back into the table. Cumulative mode (the default) gives
//! every row the running total of metres travelled since row 0. Relative
//! mode gives every real row 0 and every gap row (NaN id) the single hop
//! distance from the last real row before it.
use itertools::izip;
use log::debug;
use rayon::prelude::*;

use crate::config::{Config, Options};
use crate::error::DistanceError;
use crate::haversine::haversine_m_fpair;
use crate::table::GeoTable;
use crate::units;

/// One row of the path: (latitude, longitude, id), all in degrees except the
/// id. A NaN id marks a synthetic gap row with no real predecessor.
type Position = (f64, f64, f64);

/// Compute the distance between consecutive positions in `data`, and write
/// it to the mapped distance column (added, or overwritten if present).
///
/// `data` must contain the three columns `config.column_names` maps to the
/// LAT, LON and ID roles, pre-ordered so that row order is the sequence the
/// positions were sampled in. Distances are converted to `options.units` and
/// rounded to `config.precision.distance` decimal places.
///
/// The table is modified in place, and only on success. Any
/// [`DistanceError`] leaves it untouched.
pub fn apply(data: &mut GeoTable, options: &Options, config: &Config) -> Result<(), DistanceError> {
    let names = &config.column_names;
    let (lat, lon, id) = match (
        data.column(&names.lat),
        data.column(&names.lon),
        data.column(&names.id),
    ) {
        (Some(lat), Some(lon), Some(id)) => (lat, lon, id),
        _ => {
            return Err(DistanceError::MissingColumns {
                lat: names.lat.clone(),
                lon: names.lon.clone(),
                id: names.id.clone(),
            });
        }
    };
    if config.method != "haversine" {
        return Err(DistanceError::UnknownMethod(config.method.clone()));
    }

    let path: Vec<Position> = izip!(lat, lon, id)
        .map(|(lat, lon, id)| (*lat, *lon, *id))
        .collect();
    let dist_m = accumulate(&path, options.relative);
    let dist = finish(&dist_m, options, config)?;

    debug!(
        "Calculated {} distances into column '{}' ({}, {})",
        dist.len(),
        names.dist,
        options.units,
        if options.relative { "relative" } else { "cumulative" },
    );
    data.set_column(&names.dist, dist);
    Ok(())
}

/// Metre denominated distance series for `path`, unconverted & unrounded.
///
/// A sequential fold: each output depends on the reference position the
/// earlier rows established, so this is not parallelised.
fn accumulate(path: &[Position], relative: bool) -> Vec<f64> {
    let mut dist = Vec::with_capacity(path.len());
    let Some(&(first_lat, first_lon, _id)) = path.first() else {
        return dist;
    };
    dist.push(0.0);
    let mut reference = (first_lat, first_lon);
    let mut total = 0.0;
    for &(lat, lon, id) in &path[1..] {
        let d = haversine_m_fpair(reference, (lat, lon));
        if relative {
            if id.is_nan() {
                // gap row: report the hop from the last real row, and leave
                // the reference there so later rows measure from it too
                dist.push(d);
            } else {
                reference = (lat, lon);
                dist.push(0.0);
            }
        } else {
            total += d;
            reference = (lat, lon);
            dist.push(total);
        }
    }
    dist
}

/// Convert a metre series into the requested unit, rounded to the configured
/// precision.
///
/// The unit and the precision are both resolved before anything is
/// converted, so a bad unit or an unset precision fails without any partial
/// output.
fn finish(dist_m: &[f64], options: &Options, config: &Config) -> Result<Vec<f64>, DistanceError> {
    let factor = units::meters_factor(&options.units)
        .ok_or_else(|| DistanceError::UnknownUnit(options.units.clone()))?;
    let places = config
        .precision
        .ok_or_else(|| DistanceError::MissingPrecision {
            units: options.units.clone(),
        })?
        .distance;
    Ok(dist_m.par_iter().map(|d| round(d * factor, places)).collect())
}

/// Round this float to this many places after the decimal point.
fn round(f: f64, places: i32) -> f64 {
    let places: f64 = 10_f64.powi(places);
    (f * places).round() / places
}
