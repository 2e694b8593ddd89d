//! Forecast error types

use data_spi::SeriesError;
use thiserror::Error;

/// Errors that can occur during trend estimation and forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Caller input the core refuses to compute on
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value outside its allowed range
    #[error("Invalid config '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Historical series failed validation
    #[error("Invalid series: {0}")]
    Series(#[from] SeriesError),
}

impl ForecastError {
    /// Shorthand for an invalid configuration value.
    pub fn config(name: &str, reason: impl Into<String>) -> Self {
        ForecastError::InvalidConfig {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the data handed in rather than by
    /// configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ForecastError::InvalidInput(_) | ForecastError::Series(_))
    }
}
