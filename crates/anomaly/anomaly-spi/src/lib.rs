//! Cost Anomaly Service Provider Interface
//!
//! Defines traits and types for scoring cost observations against a
//! baseline.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Baseline, MonitoringStream};
pub use error::{AnomalyError, Result};
pub use model::{flagged_indices, AnomalyRecord, AnomalySummary, CostAlert, Severity};

// Re-export the series model the contracts are written against
pub use data_spi::{CostPoint, SeriesError};
