//! Contract definitions for cost data sources.

mod data_source;

pub use data_source::DataSource;
