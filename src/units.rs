/// Multiplicative factor which converts a distance in metres into `unit`.
///
/// Unit tokens are case sensitive. Anything not in the table returns `None`;
/// callers decide how to report that, there is no fallback unit.
pub fn meters_factor(unit: &str) -> Option<f64> {
    match unit {
        "m" | "meters" => Some(1.0),
        "km" | "kilometers" => Some(1e-3),
        "mi" | "miles" => Some(0.000621371),
        "yd" | "yards" => Some(1.09361296),
        "ft" | "feet" => Some(3.28083888),
        _ => None,
    }
}

/// Every token `meters_factor` accepts, for help text & error messages.
pub const SUPPORTED_UNITS: [&str; 10] = [
    "m",
    "meters",
    "km",
    "kilometers",
    "mi",
    "miles",
    "yd",
    "yards",
    "ft",
    "feet",
];
