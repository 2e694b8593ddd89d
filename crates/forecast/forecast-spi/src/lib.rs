//! Forecast Service Provider Interface
//!
//! Defines the trend and forecast models, the forecast error type, and the
//! traits for trend estimation and injected randomness.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{NoiseSource, TrendEstimator};
pub use error::{ForecastError, Result};
pub use model::{
    ConfidenceLevel, ForecastPoint, ForecastSummary, TrendDirection, TrendModel,
};

// Re-export the series model the contracts are written against
pub use data_spi::{CostPoint, SeriesError};
