//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or ingesting a dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory does not exist; nothing was mutated.
    #[error("data directory '{0}' does not exist, generate a dataset first")]
    MissingDataDir(PathBuf),

    /// Database error, including constraint violations surfaced by
    /// SQLite during insert.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// CSV parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
