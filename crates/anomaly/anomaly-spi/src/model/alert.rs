//! Alert types for cost anomaly monitoring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Severity;

/// An alert raised when a streamed cost deviates enough from its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAlert {
    pub date: NaiveDate,
    pub observed_cost: f64,
    pub baseline_cost: f64,
    pub deviation_percent: f64,
    pub severity: Severity,
    pub message: String,
}
