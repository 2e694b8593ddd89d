//! Contract definitions for anomaly scoring.
//!
//! This module contains trait definitions that providers must implement.

mod baseline;

pub use baseline::{Baseline, MonitoringStream};
