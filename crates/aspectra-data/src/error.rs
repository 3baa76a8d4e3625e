use thiserror::Error;

use aspectra_core::AspectError;

/// Errors raised while loading, preparing or exporting tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The header row lacks a column the loader needs.
    #[error("required column {column:?} is missing from the header")]
    MissingColumn { column: &'static str },

    #[error(transparent)]
    Core(#[from] AspectError),
}

/// Result type alias for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
