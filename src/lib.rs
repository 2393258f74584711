// src/lib.rs

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod source;
pub mod transform;
pub mod validate;

pub use config::PipelineConfig;
pub use error::ValidationError;
pub use pipeline::{run, RunSummary, Stage};
