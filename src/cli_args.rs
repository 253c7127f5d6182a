use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::path::PathBuf;

/// Annotate ordered tabular geodata with the distance between consecutive
/// positions
///
/// Reads a CSV of positions (one row per sample, in sample order), computes
/// the great circle distance between consecutive rows, and writes the input
/// back out with a distance column added.
///
/// By default every row gets the running total of distance since the first
/// row. With `--relative`, rows whose id field is empty (gap rows) get the
/// distance since the last real row instead, and every other row gets 0.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Input CSV filename
    #[arg(value_name = "INPUT.csv")]
    pub input_filename: PathBuf,

    /// Output CSV filename
    #[arg(short, long, value_name = "OUTPUT.csv")]
    pub output_filename: PathBuf,

    /// If the output file already exists, overwrite it. By default, exit if
    /// the output already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Unit to report distances in: m/meters, km/kilometers, mi/miles,
    /// yd/yards or ft/feet
    #[arg(long, value_name = "UNIT", default_value = "meters")]
    pub units: String,

    /// Report, on gap rows only, the distance since the last real row,
    /// instead of a running total on every row
    #[arg(long)]
    pub relative: bool,

    /// Distance calculation method (only "haversine" currently). Overrides
    /// the --config file
    #[arg(long, value_name = "METHOD")]
    pub method: Option<String>,

    /// Decimal places to round distances to. Overrides the --config file,
    /// defaults to 0
    #[arg(long, value_name = "N")]
    pub precision: Option<i32>,

    /// JSON file holding a calculation config (method, column_names,
    /// precision). Explicit flags override it
    #[arg(long, value_name = "CONFIG.json")]
    pub config: Option<PathBuf>,

    /// Column holding the latitude, in degrees
    #[arg(long, value_name = "COLUMN")]
    pub lat_column: Option<String>,

    /// Column holding the longitude, in degrees
    #[arg(long, value_name = "COLUMN")]
    pub lon_column: Option<String>,

    /// Column holding the sample id. An empty field marks a gap row
    #[arg(long, value_name = "COLUMN")]
    pub id_column: Option<String>,

    /// Column to write the computed distances to
    #[arg(long, value_name = "COLUMN")]
    pub dist_column: Option<String>,

    #[command(flatten)]
    pub verbose: Verbosity<clap_verbosity_flag::InfoLevel>,
}
