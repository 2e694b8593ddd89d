//! Cost observation types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single cost observation for one period (typically a day or a month).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    /// Period the cost belongs to
    pub date: NaiveDate,
    /// Cost for the period, non-negative
    pub cost: f64,
}

impl CostPoint {
    /// Create a new CostPoint.
    pub fn new(date: NaiveDate, cost: f64) -> Self {
        Self { date, cost }
    }
}

/// Build a daily series starting at `start` from raw cost values.
///
/// Returns `None` if the calendar runs out before the values do.
pub fn daily_series(start: NaiveDate, values: &[f64]) -> Option<Vec<CostPoint>> {
    let points: Vec<CostPoint> = start
        .iter_days()
        .zip(values)
        .map(|(date, &cost)| CostPoint::new(date, cost))
        .collect();
    (points.len() == values.len()).then_some(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cost_point_new() {
        let point = CostPoint::new(date(2024, 3, 1), 125.5);
        assert_eq!(point.date, date(2024, 3, 1));
        assert_eq!(point.cost, 125.5);
    }

    #[test]
    fn test_daily_series_crosses_month() {
        let series = daily_series(date(2024, 1, 30), &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[2].date, date(2024, 2, 1));
        assert_eq!(series[2].cost, 3.0);
    }

    #[test]
    fn test_daily_series_empty() {
        let series = daily_series(date(2024, 1, 1), &[]).unwrap();
        assert!(series.is_empty());
    }
}
