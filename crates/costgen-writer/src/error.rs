//! Error types for the report writers.

use costgen_core::Provider;
use thiserror::Error;

/// Errors that can occur while writing a report file.
#[derive(Error, Debug)]
pub enum WriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset was generated for another provider's schema.
    #[error("Writer expects {expected} rows but the dataset holds {actual} rows")]
    ProviderMismatch { expected: Provider, actual: Provider },
}
