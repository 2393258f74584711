// src/load.rs

use anyhow::{Context, Result};
use polars::prelude::*;
use std::{fs::File, path::Path};
use tracing::info;

/// Write `df` as comma-separated text with a header row, replacing any
/// existing file at `path`.
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("could not create `{}`", path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df.clone())
        .with_context(|| format!("writing CSV to `{}`", path.display()))?;

    info!(path = %path.display(), rows = df.height(), "wrote csv");
    Ok(())
}

/// Persist the cleaned and aggregated tables.
#[tracing::instrument(level = "info", skip_all)]
pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
    full_data: &DataFrame,
    full_data_file_path: P,
    agg_data: &DataFrame,
    agg_data_file_path: Q,
) -> Result<()> {
    write_csv(full_data, full_data_file_path)?;
    write_csv(agg_data, agg_data_file_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn agg() -> DataFrame {
        df!("Month" => [1i32, 2], "Weekly_Sales" => [15000.0, 12345.67]).unwrap()
    }

    #[test]
    fn writes_header_and_no_index() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("agg_data.csv");
        write_csv(&agg(), &path)?;

        let text = fs::read_to_string(&path)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Month,Weekly_Sales");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,15000"));
        assert_eq!(lines[2], "2,12345.67");
        Ok(())
    }

    #[test]
    fn overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("agg_data.csv");
        fs::write(&path, "stale,stale,stale\n1,2,3\n4,5,6\n7,8,9\n")?;

        write_csv(&agg(), &path)?;
        let text = fs::read_to_string(&path)?;
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn load_writes_both_files() -> Result<()> {
        let dir = tempdir()?;
        let clean_path = dir.path().join("clean_data.csv");
        let agg_path = dir.path().join("agg_data.csv");
        let clean = df!("IsHoliday" => [true, false])?;

        load(&clean, &clean_path, &agg(), &agg_path)?;
        assert!(clean_path.exists());
        assert!(agg_path.exists());
        Ok(())
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("agg_data.csv");
        let err = write_csv(&agg(), &path).unwrap_err();
        assert!(err.to_string().contains("no_such_dir"));
    }
}
