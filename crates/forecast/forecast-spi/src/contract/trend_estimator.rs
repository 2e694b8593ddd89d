//! Trait for trend estimation

use data_spi::CostPoint;

use crate::error::Result;
use crate::model::TrendModel;

/// Fits a trend to an ordered cost series.
///
/// Position in the slice is the independent variable, so order matters.
pub trait TrendEstimator: Send + Sync {
    /// Fit a trend to `series`.
    fn estimate(&self, series: &[CostPoint]) -> Result<TrendModel>;
}
