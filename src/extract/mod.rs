// src/extract/mod.rs

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::{collections::HashSet, fs::File, path::Path};
use tracing::{debug, info};

/// Column both datasets are joined on.
pub const JOIN_KEY: &str = "index";

/// Read the auxiliary Parquet file at `extra_data` and inner-join it onto
/// `store_data` by `index`. Rows without a partner on the other side are dropped.
#[tracing::instrument(level = "info", skip(store_data, extra_data), fields(path = %extra_data.as_ref().display()))]
pub fn extract<P: AsRef<Path>>(store_data: &DataFrame, extra_data: P) -> Result<DataFrame> {
    let extra = read_parquet(&extra_data)?;
    let merged = inner_join(store_data, &extra, JOIN_KEY).with_context(|| {
        format!(
            "merging primary data with `{}` on `{}`",
            extra_data.as_ref().display(),
            JOIN_KEY
        )
    })?;
    info!(
        primary_rows = store_data.height(),
        extra_rows = extra.height(),
        merged_rows = merged.height(),
        columns = merged.width(),
        "extracted"
    );
    Ok(merged)
}

/// Load a whole Parquet file into one `DataFrame`.
pub fn read_parquet<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let df = ParquetReader::new(file)
        .finish()
        .with_context(|| format!("error reading parquet from `{}`", path.display()))?;
    debug!(rows = df.height(), columns = df.width(), "read parquet");
    Ok(df)
}

/// Inner join on `on`, keeping the left table's row order.
///
/// Non-key columns present on both sides come out as `<name>_x` (left) and
/// `<name>_y` (right). Integer keys of different widths are joined as `Int64`;
/// string keys join strings. Null keys never match.
pub fn inner_join(left: &DataFrame, right: &DataFrame, on: &str) -> Result<DataFrame> {
    let left_key = left
        .column(on)
        .with_context(|| format!("join key `{}` not found in left table", on))?
        .dtype()
        .clone();
    let right_key = right
        .column(on)
        .with_context(|| format!("join key `{}` not found in right table", on))?
        .dtype()
        .clone();

    let key_dtype = match (&left_key, &right_key) {
        (l, r) if l.is_integer() && r.is_integer() => DataType::Int64,
        (DataType::String, DataType::String) => DataType::String,
        (l, r) => bail!("incompatible key types for `{}`: {} vs {}", on, l, r),
    };

    let left_names: HashSet<&str> = left.get_column_names().into_iter().map(|n| n.as_str()).collect();
    let clashes: Vec<String> = right
        .get_column_names()
        .into_iter()
        .map(|n| n.as_str())
        .filter(|n| *n != on && left_names.contains(n))
        .map(str::to_string)
        .collect();

    let mut left = left.clone();
    let mut right = right.clone();
    for name in &clashes {
        left.rename(name, format!("{name}_x").into())?;
        right.rename(name, format!("{name}_y").into())?;
    }
    if !clashes.is_empty() {
        debug!(?clashes, "suffixed overlapping columns");
    }

    let key = [col(on)];
    let merged = left
        .lazy()
        .with_column(col(on).cast(key_dtype.clone()))
        .join(
            right.lazy().with_column(col(on).cast(key_dtype)),
            key.clone(),
            key,
            JoinArgs {
                maintain_order: MaintainOrderJoin::Left,
                ..JoinArgs::new(JoinType::Inner)
            },
        )
        .collect()?;
    Ok(merged)
}
