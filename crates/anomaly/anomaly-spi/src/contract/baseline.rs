//! Baseline and monitoring trait definitions.

use data_spi::CostPoint;

use crate::error::Result;
use crate::model::CostAlert;

/// Rule that supplies the expected cost for an observation.
///
/// Implementations see the whole series so they can look back (trailing
/// averages) or use any other context they need.
pub trait Baseline: Send + Sync {
    /// Expected cost for `series[index]`, or `None` when the rule has no
    /// basis for one yet (e.g. no prior history).
    fn baseline_at(&self, series: &[CostPoint], index: usize) -> Option<f64>;
}

/// Real-time cost monitoring trait.
pub trait MonitoringStream: Send + Sync {
    /// Push a new observation and check it against recent history.
    fn push(&mut self, point: CostPoint) -> Result<Option<CostAlert>>;

    /// Costs currently held as history.
    fn window(&self) -> &[f64];

    /// Reset the monitor state.
    fn reset(&mut self);
}
