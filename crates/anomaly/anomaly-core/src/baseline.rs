//! Baseline rules.

use anomaly_spi::{AnomalyError, Baseline, Result};
use data_spi::CostPoint;

/// Mean of up to `window` costs immediately before the scored point.
///
/// The first point has no history and therefore no baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingMean {
    window: usize,
}

impl TrailingMean {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(AnomalyError::config("window", "must be positive"));
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Baseline for TrailingMean {
    fn baseline_at(&self, series: &[CostPoint], index: usize) -> Option<f64> {
        if index == 0 || index > series.len() {
            return None;
        }
        let start = index.saturating_sub(self.window);
        Some(mean(series[start..index].iter().map(|p| p.cost)))
    }
}

/// Arithmetic mean; zero for no values.
pub(crate) fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
