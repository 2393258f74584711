// src/transform/fill.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

/// The value a null in a column of `dtype` is replaced with, if there is one.
///
/// Numbers get `0`, strings `"0"`, booleans `false`, dates the epoch.
fn zero_for(dtype: &DataType) -> Option<Expr> {
    match dtype {
        dt if dt.is_integer() || dt.is_float() => Some(lit(0).cast(dt.clone())),
        DataType::String => Some(lit("0")),
        DataType::Boolean => Some(lit(false)),
        DataType::Date => Some(lit(0).cast(DataType::Date)),
        _ => None,
    }
}

/// Replace every null with the zero value of the column's own type.
///
/// Columns with no zero value (nested types, `Null`) keep their nulls.
pub fn fill_nulls_with_zero(df: &DataFrame) -> Result<DataFrame> {
    let mut fills = Vec::new();
    for column in df.get_columns() {
        let nulls = column.null_count();
        if nulls == 0 {
            continue;
        }
        match zero_for(column.dtype()) {
            Some(zero) => {
                debug!(column = %column.name(), filled = nulls, "filled nulls");
                fills.push(col(column.name().clone()).fill_null(zero));
            }
            None => {
                debug!(column = %column.name(), data_type = %column.dtype(), "no zero value for type; nulls kept");
            }
        }
    }

    if fills.is_empty() {
        return Ok(df.clone());
    }
    df.clone()
        .lazy()
        .with_columns(fills)
        .collect()
        .context("filling nulls")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fills_every_supported_type() -> Result<()> {
        let mut df = df!(
            "sales" => [Some(1.5), None],
            "dept" => [None, Some(4i32)],
            "Date" => [None, Some("2022-01-01")],
            "holiday" => [None, Some(true)],
        )?;
        let day = Series::new("day".into(), [None, Some(19000i32)]).cast(&DataType::Date)?;
        df.with_column(day)?;

        let filled = fill_nulls_with_zero(&df)?;
        for column in filled.get_columns() {
            assert_eq!(column.null_count(), 0, "{}", column.name());
        }

        assert_eq!(filled.column("sales")?.f64()?.get(1), Some(0.0));
        assert_eq!(filled.column("dept")?.i32()?.get(0), Some(0));
        let date = filled.column("Date")?.str()?;
        assert_eq!(date.get(0), Some("0"));
        assert_eq!(date.get(1), Some("2022-01-01"));
        assert_eq!(filled.column("holiday")?.bool()?.get(0), Some(false));
        let day = filled.column("day")?.cast(&DataType::Int32)?;
        assert_eq!(day.i32()?.get(0), Some(0));
        Ok(())
    }

    #[test]
    fn types_stay_the_same() -> Result<()> {
        let df = df!("dept" => [None, Some(4i64)], "cpi" => [None, Some(1.0f32)])?;
        let filled = fill_nulls_with_zero(&df)?;
        assert_eq!(filled.column("dept")?.dtype(), &DataType::Int64);
        assert_eq!(filled.column("cpi")?.dtype(), &DataType::Float32);
        Ok(())
    }

    #[test]
    fn null_typed_columns_are_left_alone() -> Result<()> {
        let empty = Series::full_null("empty".into(), 2, &DataType::Null);
        let df = DataFrame::new(vec![empty.into()])?;
        let filled = fill_nulls_with_zero(&df)?;
        assert_eq!(filled.column("empty")?.dtype(), &DataType::Null);
        assert_eq!(filled.column("empty")?.null_count(), 2);
        Ok(())
    }
}
