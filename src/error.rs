//! Error types for exo-eval operations.

use thiserror::Error;

/// Result type alias for exo-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while comparing schedules and rendering charts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid wage grid parameters.
    #[error("Invalid wage grid: {0}")]
    Grid(String),

    /// Chart cannot be assembled from the given inputs.
    #[error("Chart error: {0}")]
    Chart(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
