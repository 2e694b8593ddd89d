//! Linear trend model

use serde::{Deserialize, Serialize};

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Flat,
}

/// Fitted line `cost ≈ slope * index + intercept` over series positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    /// Cost change per period
    pub slope: f64,
    /// Fitted cost at index 0
    pub intercept: f64,
}

impl TrendModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// A zero-slope trend at `level`.
    pub fn flat(level: f64) -> Self {
        Self::new(0.0, level)
    }

    /// Fitted value at a series position.
    pub fn value_at(&self, index: f64) -> f64 {
        self.intercept + self.slope * index
    }

    pub fn direction(&self) -> TrendDirection {
        if self.slope > 0.0 {
            TrendDirection::Increasing
        } else if self.slope < 0.0 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Flat
        }
    }
}
