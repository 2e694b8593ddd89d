//! Anomaly scoring error types.

use data_spi::SeriesError;
use thiserror::Error;

/// Anomaly scoring errors.
///
/// A zero baseline is not an error; it produces a flagged record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Length mismatch: {points} points but {baselines} baselines")]
    LengthMismatch { points: usize, baselines: usize },

    #[error("Invalid config: {name} - {reason}")]
    InvalidConfig { name: String, reason: String },

    #[error("Invalid series: {0}")]
    Series(#[from] SeriesError),
}

impl AnomalyError {
    /// Shorthand for an invalid configuration value.
    pub fn config(name: &str, reason: impl Into<String>) -> Self {
        AnomalyError::InvalidConfig {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the data handed in rather than by
    /// configuration.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AnomalyError::InvalidConfig { .. })
    }
}

/// Result type for anomaly scoring operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
