pub mod config;
pub mod distance;
pub mod error;
pub mod haversine;
pub mod table;
pub mod units;

pub use config::{ColumnNames, Config, Options, Precision};
pub use distance::apply;
pub use error::DistanceError;
pub use table::GeoTable;
