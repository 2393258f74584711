// src/transform/date_parser.rs

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use tracing::warn;

/// Format `Date` strings must match, exactly.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-strict, exact `%Y-%m-%d` parsing: a value that doesn't match becomes null.
pub fn date_options() -> StrptimeOptions {
    StrptimeOptions {
        format: Some(DATE_FORMAT.into()),
        strict: false,
        exact: true,
        cache: true,
    }
}

/// Expression turning a `Date` column of type `dtype` into a `Date`.
///
/// Strings are parsed with [`date_options`]; datetimes are truncated; dates
/// pass through.
pub fn parse_date_expr(dtype: &DataType) -> Result<Expr> {
    let date = col("Date");
    Ok(match dtype {
        DataType::String => date.str().to_date(date_options()),
        DataType::Date => date,
        DataType::Datetime(_, _) => date.cast(DataType::Date),
        other => bail!("Date column has unsupported type {}", other),
    })
}

/// Calendar month (1-12) of `Date` as `Int32`; null dates give null months.
pub fn month_expr() -> Expr {
    col("Date").dt().month().cast(DataType::Int32).alias("Month")
}

/// Replace `Date` with its parsed form and add (or overwrite) `Month`.
pub fn parse_date_column(df: &DataFrame) -> Result<DataFrame> {
    let raw = df.column("Date").context("table has no `Date` column")?;
    let raw_nulls = raw.null_count();

    let parsed = df
        .clone()
        .lazy()
        .with_column(parse_date_expr(raw.dtype())?.alias("Date"))
        .with_column(month_expr())
        .collect()
        .context("parsing Date")?;

    let coerced = parsed.column("Date")?.null_count().saturating_sub(raw_nulls);
    if coerced > 0 {
        warn!(coerced, format = DATE_FORMAT, "unparsable dates coerced to null");
    }
    Ok(parsed)
}
