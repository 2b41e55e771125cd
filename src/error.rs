//! Error types for freqmine.

use thiserror::Error;

/// Top-level error type for mining and ingestion operations.
#[derive(Debug, Error)]
pub enum MineError {
    /// Minimum support was supplied as a negative number.
    #[error("invalid minimum support {0}: must be a non-negative transaction count")]
    InvalidThreshold(i64),

    /// The input file has no column with the expected name.
    #[error("input file has no '{0}' column")]
    MissingColumn(String),

    /// A data row is missing the items field.
    #[error("row {0} is missing the items field")]
    MalformedRow(usize),

    /// The transaction collection is empty and the caller required otherwise.
    #[error("transaction collection is empty")]
    EmptyInput,

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error wrapper.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for mining and ingestion operations.
pub type Result<T> = std::result::Result<T, MineError>;
