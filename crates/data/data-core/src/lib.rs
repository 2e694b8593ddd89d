//! Data Source Core
//!
//! Implementations for cost data sources.

pub mod fallback;
pub mod file;
pub mod memory;

pub use fallback::FallbackSource;
pub use file::{FileFormat, FileSource};
pub use memory::InMemorySource;

// Re-export SPI types for implementations
pub use data_spi::{CostPoint, DataError, DataSource, Result, SeriesError, SeriesQuery};
