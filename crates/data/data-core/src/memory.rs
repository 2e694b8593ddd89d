//! In-memory data source.

use data_spi::{validate_series, CostPoint, DataSource, Result, SeriesQuery};

/// Serves a fixed series held in memory.
///
/// The scope part of a query is ignored; only the date range applies.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    points: Vec<CostPoint>,
}

impl InMemorySource {
    /// Create a source over `points`, validating them up front.
    pub fn new(name: impl Into<String>, points: Vec<CostPoint>) -> Result<Self> {
        validate_series(&points)?;
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Number of points held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the source holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl DataSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, query: &SeriesQuery) -> Result<Vec<CostPoint>> {
        Ok(query.filter(&self.points))
    }
}
