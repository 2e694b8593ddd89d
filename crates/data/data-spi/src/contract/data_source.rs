//! Data source trait definition.

use crate::error::Result;
use crate::model::{CostPoint, SeriesQuery};

/// Trait for sources of historical cost series.
///
/// Implementations return points ordered by date. Whether to fall back to
/// another source on failure is decided by the caller, not the source.
pub trait DataSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch the series matching `query`.
    fn fetch(&self, query: &SeriesQuery) -> Result<Vec<CostPoint>>;
}
