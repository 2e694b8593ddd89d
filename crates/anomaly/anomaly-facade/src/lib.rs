//! Anomaly Facade
//!
//! High-level API for cost anomaly scoring. Re-exports all public types
//! from the anomaly stack and adds a one-call scoring helper.

// Re-export everything from API (which includes SPI)
pub use anomaly_api::*;

// Re-export core implementations
pub use anomaly_core::{alerting, baseline, monitoring, scorer};
pub use anomaly_core::{create_alert, summarize, AnomalyScorer, CostMonitor, TrailingMean};

/// Score `observed` against `baseline`.
///
/// `None` uses [`SeverityThresholds::default`]. A zero baseline yields a
/// record flagged `undefined_baseline` rather than an error.
pub fn score_anomaly(
    observed: f64,
    baseline: f64,
    thresholds: Option<SeverityThresholds>,
) -> Result<AnomalyRecord> {
    AnomalyScorer::new(thresholds.unwrap_or_default())?.score(observed, baseline)
}
