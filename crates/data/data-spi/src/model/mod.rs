//! Data models for cost series.

mod cost_point;
mod query;
mod validation;

pub use cost_point::{daily_series, CostPoint};
pub use query::SeriesQuery;
pub use validation::{validate_cost, validate_non_empty, validate_series};
