// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Where the job reads from and writes to.
///
/// Any subset of fields can be given in a YAML file; the rest keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Primary table (`.parquet`, otherwise read as CSV with a header row).
    pub primary_path: PathBuf,
    /// Auxiliary Parquet file joined on `index`.
    pub extra_data_path: PathBuf,
    pub clean_data_path: PathBuf,
    pub agg_data_path: PathBuf,
    /// Rows must have `Weekly_Sales` strictly above this.
    pub sales_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            primary_path: PathBuf::from("grocery_sales.csv"),
            extra_data_path: PathBuf::from("extra_data.parquet"),
            clean_data_path: PathBuf::from("clean_data.csv"),
            agg_data_path: PathBuf::from("agg_data.csv"),
            sales_threshold: crate::transform::SALES_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Load a YAML config, falling back to defaults for anything not set.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config `{}`", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing config `{}`", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid pipeline config")
    }
}
