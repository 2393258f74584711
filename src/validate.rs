// src/validate.rs

use crate::error::ValidationError;
use std::path::Path;
use tracing::{debug, error};

/// Check that `file_path` exists on disk.
pub fn validation<P: AsRef<Path>>(file_path: P) -> Result<(), ValidationError> {
    let path = file_path.as_ref();
    if path.exists() {
        debug!(path = %path.display(), "output present");
        Ok(())
    } else {
        error!(path = %path.display(), "expected output is missing");
        Err(ValidationError::MissingFile {
            path: path.to_path_buf(),
        })
    }
}
