//! Forecast Core
//!
//! Core implementations for trend estimation, injected noise, and the
//! forecast generator.

pub mod generator;
pub mod noise;
pub mod trend;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ConfidenceLevel, CostPoint, ForecastError, ForecastPoint, ForecastSummary, NoiseSource,
    Result, TrendDirection, TrendEstimator, TrendModel,
};

// Re-export main types
pub use generator::ForecastGenerator;
pub use noise::{NoNoise, SeededNoise};
pub use trend::LeastSquaresTrend;
