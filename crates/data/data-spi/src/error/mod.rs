//! Error types for cost series and data sources.

mod data_error;

pub use data_error::{DataError, Result, SeriesError};
