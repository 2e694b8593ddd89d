//! Series query types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CostPoint;

/// What a data source should return.
///
/// All fields are optional; an empty query asks for everything the
/// source holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesQuery {
    /// Account, service or tag the costs belong to
    pub scope: Option<String>,
    /// First date to include (inclusive)
    pub start: Option<NaiveDate>,
    /// Last date to include (inclusive)
    pub end: Option<NaiveDate>,
}

impl SeriesQuery {
    /// Query everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict the query to a scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Restrict the query to an inclusive date range.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Whether a date falls inside the requested range.
    pub fn includes(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }

    /// Keep only the points inside the requested range.
    pub fn filter(&self, points: &[CostPoint]) -> Vec<CostPoint> {
        points.iter().filter(|p| self.includes(p.date)).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_all_includes_everything() {
        let query = SeriesQuery::all();
        assert!(query.includes(date(1)));
        assert!(query.includes(NaiveDate::MAX));
    }

    #[test]
    fn test_between_is_inclusive() {
        let query = SeriesQuery::all().between(date(2), date(4));
        assert!(!query.includes(date(1)));
        assert!(query.includes(date(2)));
        assert!(query.includes(date(4)));
        assert!(!query.includes(date(5)));
    }

    #[test]
    fn test_filter() {
        let points: Vec<CostPoint> = (1..=5).map(|d| CostPoint::new(date(d), d as f64)).collect();
        let query = SeriesQuery::all().scope("compute").between(date(2), date(3));
        let filtered = query.filter(&points);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].cost, 2.0);
        assert_eq!(query.scope.as_deref(), Some("compute"));
    }
}
