//! Forecast Facade
//!
//! High-level API for cost trend estimation and forecasting. Re-exports all
//! public types from the forecast stack and adds one-call helpers.

// Re-export everything from API (which includes SPI)
pub use forecast_api::*;

// Re-export core implementations
pub use forecast_core::{generator, noise, trend};
pub use forecast_core::{ForecastGenerator, LeastSquaresTrend, NoNoise, SeededNoise};

/// Fit a least-squares trend to `series`.
///
/// An empty series yields a flat zero trend and a single point a flat
/// trend at its cost.
pub fn estimate_trend(series: &[CostPoint]) -> Result<TrendModel> {
    LeastSquaresTrend.estimate(series)
}

/// Forecast `days` periods after `series` with the default configuration
/// and no noise.
pub fn generate_forecast(
    series: &[CostPoint],
    days: usize,
    level: ConfidenceLevel,
) -> Result<Vec<ForecastPoint>> {
    ForecastGenerator::default().generate(series, days, level)
}

/// Totals over a forecast.
pub fn summarize(points: &[ForecastPoint]) -> ForecastSummary {
    ForecastSummary::from_points(points)
}
