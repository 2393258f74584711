// src/aggregate.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::info;

/// Round to two decimal places, ties to even (`0.125` → `0.12`).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// Mean `Weekly_Sales` per `Month`, rounded to cents, one row per month in
/// ascending order. Rows with a null `Month` are not grouped.
#[tracing::instrument(level = "info", skip(clean_data), fields(rows = clean_data.height()))]
pub fn avg_weekly_sales_per_month(clean_data: &DataFrame) -> Result<DataFrame> {
    let mut agg = clean_data
        .clone()
        .lazy()
        .filter(col("Month").is_not_null())
        .group_by([col("Month").cast(DataType::Int32)])
        .agg([col("Weekly_Sales").cast(DataType::Float64).mean()])
        .sort(["Month"], SortMultipleOptions::default())
        .collect()
        .context("grouping Weekly_Sales by Month")?;

    let rounded: Float64Chunked = agg
        .column("Weekly_Sales")?
        .f64()?
        .into_iter()
        .map(|mean| mean.map(round2))
        .collect();
    agg.with_column(rounded.with_name("Weekly_Sales".into()).into_series())?;

    info!(months = agg.height(), "aggregated");
    Ok(agg)
}
