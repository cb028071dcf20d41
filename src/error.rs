//! Error types for the data pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while labeling subjects or building dataset splits.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("labeled data file not found: {}", .0.display())]
    LabeledDataNotFound(PathBuf),

    #[error("invalid measurement for subject {subject_id}: {message}")]
    InvalidMeasurement {
        subject_id: String,
        message: String,
    },
}

impl PipelineError {
    /// True when the error is the recoverable missing-artifact condition:
    /// the splitter was asked to load labeled data that does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LabeledDataNotFound(_))
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
