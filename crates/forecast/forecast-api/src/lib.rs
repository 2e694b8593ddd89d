//! Forecast Consumer API
//!
//! Configuration types and builders for the forecast generator.
//!
//! This crate provides:
//! - `ForecastConfig` and its knobs (margins, widening, projection, granularity)
//! - `ForecastConfigBuilder` for fluent construction
//! - Re-exports from SPI for convenience

mod builder;
mod config;

pub use builder::ForecastConfigBuilder;
pub use config::{ConfidenceMargins, ForecastConfig, Granularity, Projection, Widening};

// Re-export SPI types
pub use forecast_spi::{
    ConfidenceLevel, CostPoint, ForecastError, ForecastPoint, ForecastSummary, NoiseSource,
    Result, SeriesError, TrendDirection, TrendEstimator, TrendModel,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConfidenceMargins, ForecastConfig, ForecastConfigBuilder, Granularity, Projection,
        Widening,
    };
    pub use forecast_spi::{
        ConfidenceLevel, CostPoint, ForecastError, ForecastPoint, NoiseSource, Result,
        TrendEstimator, TrendModel,
    };
}
