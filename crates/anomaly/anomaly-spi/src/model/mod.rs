//! Data models for cost anomaly scoring.
//!
//! This module contains data structures used throughout the anomaly scoring system.

mod alert;
mod anomaly_record;
mod anomaly_summary;
mod severity;

pub use alert::CostAlert;
pub use anomaly_record::AnomalyRecord;
pub use anomaly_summary::{flagged_indices, AnomalySummary};
pub use severity::Severity;
