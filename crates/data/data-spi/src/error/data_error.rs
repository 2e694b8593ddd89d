//! Data error types.

use thiserror::Error;

/// Problems with the shape or values of a cost series.
///
/// Every variant is an invalid-input condition: the caller handed in data
/// the core refuses to compute on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// Series has no points where at least one is required
    #[error("Series is empty")]
    Empty,

    /// A cost below zero
    #[error("Negative cost {cost} at index {index}")]
    NegativeCost { index: usize, cost: f64 },

    /// A NaN or infinite cost
    #[error("Non-finite cost at index {index}")]
    NonFiniteCost { index: usize },

    /// Dates not strictly increasing
    #[error("Date at index {index} is not after the previous date")]
    OutOfOrder { index: usize },
}

/// Data source errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// Reading the underlying storage failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse the source content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid date format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Source cannot serve the request right now
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// Source returned data that failed validation
    #[error("Invalid series: {0}")]
    Series(#[from] SeriesError),
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
