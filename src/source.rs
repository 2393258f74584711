// src/source.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use std::{fs::File, path::Path};
use tracing::info;

/// Rows sampled when inferring CSV column types.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Load the primary sales table. `.parquet` files go through the Parquet
/// reader; anything else is read as CSV with a header row.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let is_parquet = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));

    let df = if is_parquet {
        crate::extract::read_parquet(path)?
    } else {
        read_csv(path)?
    };
    info!(path = %path.display(), rows = df.height(), columns = df.width(), "loaded table");
    Ok(df)
}

/// Read a headed CSV file, inferring column types from its contents.
///
/// Date-like text is never inferred as a date: `Date` stays a string so the
/// zero-fill and `%Y-%m-%d` parse in the transform decide what it becomes.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;

    let opts = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .map_parse_options(|p| p.with_try_parse_dates(false));

    CsvReader::new(file)
        .with_options(opts)
        .finish()
        .with_context(|| format!("CSV parse error in `{}`", path.display()))
}
