// src/pipeline.rs

use crate::{
    aggregate::avg_weekly_sales_per_month, config::PipelineConfig, extract::extract, load::load,
    transform::transform_with_threshold, validate::validation,
};
use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

/// Last stage a run completed. Stages only ever move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Extracted,
    Transformed,
    Aggregated,
    Loaded,
    Validated,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Extracted => "Extracted",
            Stage::Transformed => "Transformed",
            Stage::Aggregated => "Aggregated",
            Stage::Loaded => "Loaded",
            Stage::Validated => "Validated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub merged_rows: usize,
    pub clean_rows: usize,
    pub agg_rows: usize,
    pub stage: Stage,
}

/// Run extract → transform → aggregate → load → validate over `store_data`.
///
/// The first failing stage aborts the run. A missing output surfaces as a
/// [`crate::ValidationError`] inside the returned `anyhow::Error`.
pub fn run(store_data: &DataFrame, config: &PipelineConfig) -> Result<RunSummary> {
    let merged = extract(store_data, &config.extra_data_path)?;
    info!(stage = Stage::Extracted.as_str(), rows = merged.height());

    let clean = transform_with_threshold(&merged, config.sales_threshold)?;
    info!(stage = Stage::Transformed.as_str(), rows = clean.height());

    let agg = avg_weekly_sales_per_month(&clean)?;
    info!(stage = Stage::Aggregated.as_str(), rows = agg.height());

    load(&clean, &config.clean_data_path, &agg, &config.agg_data_path)?;
    info!(stage = Stage::Loaded.as_str());

    validation(&config.clean_data_path)?;
    validation(&config.agg_data_path)?;
    info!(stage = Stage::Validated.as_str());

    Ok(RunSummary {
        merged_rows: merged.height(),
        clean_rows: clean.height(),
        agg_rows: agg.height(),
        stage: Stage::Validated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Extracted < Stage::Transformed);
        assert!(Stage::Transformed < Stage::Aggregated);
        assert!(Stage::Aggregated < Stage::Loaded);
        assert!(Stage::Loaded < Stage::Validated);
        assert_eq!(Stage::Loaded.as_str(), "Loaded");
    }
}
