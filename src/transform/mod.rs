// src/transform/mod.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{debug, info, Level};

pub mod date_parser;
pub mod fill;

/// Rows must sell strictly more than this per week to be kept.
pub const SALES_THRESHOLD: f64 = 10_000.0;

/// Columns of the cleaned table, in output order.
pub const CLEAN_COLUMNS: [&str; 7] = [
    "Store_ID",
    "Month",
    "Dept",
    "IsHoliday",
    "Weekly_Sales",
    "CPI",
    "Unemployment",
];

/// Clean the merged table with the default sales threshold.
pub fn transform(raw_data: &DataFrame) -> Result<DataFrame> {
    transform_with_threshold(raw_data, SALES_THRESHOLD)
}

/// Null-fill, parse `Date`, derive `Month`, drop rows at or below `threshold`
/// and project to [`CLEAN_COLUMNS`]. Always in that order.
#[tracing::instrument(level = "info", skip(raw_data), fields(rows = raw_data.height()))]
pub fn transform_with_threshold(raw_data: &DataFrame, threshold: f64) -> Result<DataFrame> {
    let filled = fill::fill_nulls_with_zero(raw_data)?;
    let dated = date_parser::parse_date_column(&filled)?;
    let kept = filter_by_sales(&dated, threshold)?;
    let clean = project(&kept, &CLEAN_COLUMNS)?;

    info!(
        rows_in = raw_data.height(),
        rows_out = clean.height(),
        "transformed"
    );
    if tracing::enabled!(Level::DEBUG) {
        debug!("clean data\n{}", clean);
    }
    Ok(clean)
}

/// Keep rows whose `Weekly_Sales` is strictly greater than `threshold`.
/// A null sale never passes.
pub fn filter_by_sales(df: &DataFrame, threshold: f64) -> Result<DataFrame> {
    df.column("Weekly_Sales")
        .context("table has no `Weekly_Sales` column")?;
    df.clone()
        .lazy()
        .filter(
            col("Weekly_Sales")
                .cast(DataType::Float64)
                .gt(lit(threshold)),
        )
        .collect()
        .context("filtering on Weekly_Sales")
}

/// Restrict `df` to `columns`, in that order.
pub fn project(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    for name in columns {
        df.column(name)
            .with_context(|| format!("column `{}` not found", name))?;
    }
    df.select(columns.iter().copied())
        .context("projecting columns")
}
