// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Raised when an output the loader was expected to produce is not on disk.
///
/// Every other failure in the pipeline is an `anyhow::Error`; this one is typed
/// so callers can match on it, or `downcast_ref` it out of an `anyhow::Error`.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("There is no file at the path {}", .path.display())]
    MissingFile { path: PathBuf },
}

impl ValidationError {
    /// The path that failed validation.
    pub fn path(&self) -> &PathBuf {
        match self {
            ValidationError::MissingFile { path } => path,
        }
    }
}
