//! Anomaly Scoring Core
//!
//! Implementations for deviation scoring, baseline rules, streaming
//! monitoring, and alerting.

pub mod alerting;
pub mod baseline;
pub mod monitoring;
pub mod scorer;

// Re-export SPI types for implementations
pub use anomaly_spi::{
    AnomalyError, AnomalyRecord, AnomalySummary, Baseline, CostAlert, CostPoint,
    MonitoringStream, Result, Severity,
};

// Re-export main types
pub use alerting::create_alert;
pub use baseline::TrailingMean;
pub use monitoring::CostMonitor;
pub use scorer::{summarize, AnomalyScorer};
