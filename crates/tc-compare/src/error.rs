//! Error types for comparison runs

use std::path::PathBuf;
use tc_core::Source;
use thiserror::Error;

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors that block a comparison run
#[derive(Debug, Error)]
pub enum CompareError {
    /// One of the inputs is empty or whitespace-only
    #[error("no {side} data provided; both shadow and device data are required")]
    MissingInput { side: Source },

    /// Failed to write the report artifact
    #[error("failed to write report to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
