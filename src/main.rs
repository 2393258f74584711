// src/main.rs

use anyhow::Result;
use grocery_etl::{pipeline, source, PipelineConfig};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) config: optional YAML path as the only argument ──────────
    let config = match env::args().nth(1) {
        Some(path) => PipelineConfig::from_yaml_file(path)?,
        None => PipelineConfig::default(),
    };
    info!(?config, "configured");

    // ─── 3) primary sales table ──────────────────────────────────────
    let grocery_sales = source::read_table(&config.primary_path)?;

    // ─── 4) extract → transform → aggregate → load → validate ────────
    let summary = pipeline::run(&grocery_sales, &config)?;
    info!(
        merged = summary.merged_rows,
        clean = summary.clean_rows,
        months = summary.agg_rows,
        stage = summary.stage.as_str(),
        "all done"
    );
    Ok(())
}
