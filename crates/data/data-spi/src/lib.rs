//! Cost Data Service Provider Interface
//!
//! Defines the cost series model, its validation rules, and the trait for
//! sources that supply historical costs.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result, SeriesError};
pub use model::{
    daily_series, validate_cost, validate_non_empty, validate_series, CostPoint, SeriesQuery,
};
