//! Anomaly Scoring API
//!
//! Configuration types for anomaly scoring and streaming monitoring.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    flagged_indices, AnomalyError, AnomalyRecord, AnomalySummary, Baseline, CostAlert, CostPoint,
    MonitoringStream, Result, SeriesError, Severity,
};

// ============================================================================
// Severity Thresholds
// ============================================================================

/// Deviation thresholds, in percent, separating the severity tiers.
///
/// Applied to `|deviation_percent|` with exclusive comparisons: above
/// `high` is `High`, above `medium` is `Medium`, anything else is `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    pub medium: f64,
    pub high: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            medium: 100.0,
            high: 200.0,
        }
    }
}

impl SeverityThresholds {
    pub fn new(medium: f64, high: f64) -> Self {
        Self { medium, high }
    }

    /// Severity tier for a signed deviation percentage.
    pub fn severity_for(&self, deviation_percent: f64) -> Severity {
        let magnitude = deviation_percent.abs();
        if magnitude > self.high {
            Severity::High
        } else if magnitude > self.medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("thresholds.medium", self.medium), ("thresholds.high", self.high)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnomalyError::config(
                    name,
                    format!("must be a finite non-negative percentage, got {}", value),
                ));
            }
        }
        if self.high < self.medium {
            return Err(AnomalyError::config("thresholds.high", "must not be below medium"));
        }
        Ok(())
    }
}

// ============================================================================
// Monitor Configuration
// ============================================================================

/// Streaming monitor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Number of prior costs averaged into the baseline (default: 7).
    pub window: usize,
    /// Lowest severity that raises an alert (default: medium).
    pub min_severity: Severity,
    /// Severity thresholds used to score each point.
    pub thresholds: SeverityThresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window: 7,
            min_severity: Severity::Medium,
            thresholds: SeverityThresholds::default(),
        }
    }
}

impl MonitorConfig {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    pub fn with_thresholds(mut self, thresholds: SeverityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(AnomalyError::config("monitor.window", "must be positive"));
        }
        self.thresholds.validate()
    }
}
