//! Model module containing data structures

mod confidence_level;
mod forecast_point;
mod forecast_summary;
mod trend_model;

pub use confidence_level::ConfidenceLevel;
pub use forecast_point::ForecastPoint;
pub use forecast_summary::ForecastSummary;
pub use trend_model::{TrendDirection, TrendModel};
