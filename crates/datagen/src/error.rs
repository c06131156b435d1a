//! Generation error types.

use thiserror::Error;

/// Errors that can occur while generating or exporting a dataset.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Requested row count is not usable.
    #[error("row count must be a positive integer, got {0}")]
    InvalidRowCount(u32),

    /// A unique-value pool ran out of fresh candidates.
    #[error("unique value pool exhausted for {field} after {attempts} attempts")]
    UniquePoolExhausted {
        field: &'static str,
        attempts: usize,
    },

    /// Weighted sampler construction failed.
    #[error("invalid sampling weights: {0}")]
    Weights(#[from] rand::distr::weighted::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
