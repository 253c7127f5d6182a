use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use num_format::{Locale, ToFormattedString};
use ordered_float::OrderedFloat;
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use geodata_distance::{Config, GeoTable, Options, Precision, apply};

mod cli_args;

fn main() -> Result<()> {
    let args = cli_args::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if !args.overwrite && args.output_filename.exists() {
        warn!(
            "Output file {} already exists and --overwrite not used. Refusing to overwrite, and exiting early",
            args.output_filename.display()
        );
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let options = Options {
        units: args.units.clone(),
        relative: args.relative,
    };
    debug!("Options: {options:?} Config: {config:?}");

    info!("Reading {}", args.input_filename.display());
    let input = std::fs::File::open(&args.input_filename)
        .with_context(|| format!("opening {}", args.input_filename.display()))?;
    let mut data = GeoTable::from_csv(BufReader::new(input))
        .with_context(|| format!("reading {}", args.input_filename.display()))?;

    let started = Instant::now();
    apply(&mut data, &options, &config)?;
    debug!("Distance calculation took {:.1?}", started.elapsed());

    let dist = data.column(&config.column_names.dist).unwrap_or(&[]);
    let max = dist.iter().copied().map(OrderedFloat).max();
    info!(
        "Calculated '{}' for {} rows in '{}' (max value {})",
        config.column_names.dist,
        data.num_rows().to_formatted_string(&Locale::en),
        options.units,
        max.map_or("n/a".to_string(), |m| m.0.to_string()),
    );

    let output = std::fs::File::create(&args.output_filename)
        .with_context(|| format!("creating {}", args.output_filename.display()))?;
    data.to_csv(BufWriter::new(output))?;
    info!("Wrote {}", args.output_filename.display());

    Ok(())
}

/// Start from the `--config` file (if any), then let explicit flags
/// override. Precision falls back to 0 so a bare invocation works without a
/// config file.
fn resolve_config(args: &cli_args::Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(method) = &args.method {
        config.method = method.clone();
    }
    if let Some(places) = args.precision {
        config.precision = Some(Precision { distance: places });
    } else if config.precision.is_none() {
        config.precision = Some(Precision { distance: 0 });
    }
    if let Some(name) = &args.lat_column {
        config.column_names.lat = name.clone();
    }
    if let Some(name) = &args.lon_column {
        config.column_names.lon = name.clone();
    }
    if let Some(name) = &args.id_column {
        config.column_names.id = name.clone();
    }
    if let Some(name) = &args.dist_column {
        config.column_names.dist = name.clone();
    }
    Ok(config)
}
