//! A small, insertion ordered table of named `f64` columns.
//!
//! Row order is significant. It is the traversal order for anything which
//! walks the table (row 0 is the first sample, row N-1 the last), not a sort
//! key. Callers are responsible for handing over pre-ordered data.
use anyhow::{Context, Result, ensure};
use std::io::{Read, Write};

/// Ordered collection of named, equal length `f64` columns.
///
/// Empty CSV fields (and any field spelled `nan`) are read as NaN, and NaN
/// values are written back out as empty fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoTable {
    columns: Vec<(String, Vec<f64>)>,
    num_rows: usize,
}

impl GeoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs. All columns must have the
    /// same length.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let num_rows = columns.first().map_or(0, |(_name, vals)| vals.len());
        for (name, vals) in &columns {
            ensure!(
                vals.len() == num_rows,
                "column '{}' has {} rows, expected {}",
                name,
                vals.len(),
                num_rows
            );
        }
        Ok(GeoTable { columns, num_rows })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _vals)| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _vals)| n == name)
            .map(|(_n, vals)| vals.as_slice())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _vals)| n.as_str())
    }

    /// Add `values` as a new last column, or overwrite the existing column
    /// of that name in place.
    ///
    /// Panics if `values` doesn't have one entry per row (on a table with no
    /// columns yet, `values` defines the number of rows).
    pub fn set_column(&mut self, name: &str, values: Vec<f64>) {
        if self.columns.is_empty() {
            self.num_rows = values.len();
        }
        assert_eq!(
            values.len(),
            self.num_rows,
            "column '{}' has {} rows, table has {}",
            name,
            values.len(),
            self.num_rows
        );
        match self.columns.iter_mut().find(|(n, _vals)| n == name) {
            Some((_n, vals)) => *vals = values,
            None => self.columns.push((name.to_string(), values)),
        }
    }

    /// Read a headered CSV into a table.
    pub fn from_csv(reader: impl Read) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .context("reading CSV header row")?
            .iter()
            .map(String::from)
            .collect();
        let mut columns: Vec<(String, Vec<f64>)> =
            headers.into_iter().map(|h| (h, vec![])).collect();

        let mut num_rows = 0;
        for (row_num, record) in rdr.records().enumerate() {
            let record = record.with_context(|| format!("reading CSV row {}", row_num + 1))?;
            for (field, (name, vals)) in record.iter().zip(columns.iter_mut()) {
                vals.push(parse_field(field).with_context(|| {
                    format!("CSV row {} column '{}': bad number {:?}", row_num + 1, name, field)
                })?);
            }
            num_rows += 1;
        }

        Ok(GeoTable { columns, num_rows })
    }

    /// Write the table back out as a headered CSV.
    pub fn to_csv(&self, writer: impl Write) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.column_names())?;
        for row in 0..self.num_rows {
            for (_name, vals) in &self.columns {
                let v = vals[row];
                if v.is_nan() {
                    wtr.write_field("")?;
                } else {
                    wtr.write_field(v.to_string())?;
                }
            }
            wtr.write_record(None::<&[u8]>)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn parse_field(field: &str) -> Result<f64> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    Ok(field.trim().parse()?)
}
