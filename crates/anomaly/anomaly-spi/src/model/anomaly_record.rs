//! Anomaly record type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Severity;

/// Result of scoring one observation against its baseline.
///
/// When the baseline is positive, `deviation_percent` holds
/// `(observed - baseline) / baseline * 100` and `severity` its tier.
/// When the baseline is zero there is nothing to compare against:
/// `undefined_baseline` is set and both are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Period of the observation, when scored from a series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Observed cost
    pub observed_cost: f64,
    /// Expected cost the observation is compared against
    pub baseline_cost: f64,
    /// Signed deviation from the baseline in percent
    pub deviation_percent: Option<f64>,
    /// Severity tier of the deviation
    pub severity: Option<Severity>,
    /// Baseline was zero so no deviation could be computed
    pub undefined_baseline: bool,
}

impl AnomalyRecord {
    /// A record with a computed deviation.
    pub fn scored(
        observed_cost: f64,
        baseline_cost: f64,
        deviation_percent: f64,
        severity: Severity,
    ) -> Self {
        Self {
            date: None,
            observed_cost,
            baseline_cost,
            deviation_percent: Some(deviation_percent),
            severity: Some(severity),
            undefined_baseline: false,
        }
    }

    /// A record flagged for a zero baseline.
    pub fn undefined(observed_cost: f64) -> Self {
        Self {
            date: None,
            observed_cost,
            baseline_cost: 0.0,
            deviation_percent: None,
            severity: None,
            undefined_baseline: true,
        }
    }

    /// Attach the observation date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Whether the record has a severity of at least `min`.
    ///
    /// Undefined-baseline records never qualify.
    pub fn is_at_least(&self, min: Severity) -> bool {
        self.severity.map_or(false, |s| s >= min)
    }
}
