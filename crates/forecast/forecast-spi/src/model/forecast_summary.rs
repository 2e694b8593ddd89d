//! Forecast totals

use serde::{Deserialize, Serialize};

use super::ForecastPoint;

/// Totals over a forecast horizon
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Number of forecasted periods
    pub periods: usize,
    /// Sum of point forecasts
    pub total_predicted: f64,
    /// Sum of lower bounds
    pub total_lower: f64,
    /// Sum of upper bounds
    pub total_upper: f64,
    /// Mean point forecast per period (0 for an empty forecast)
    pub average_predicted: f64,
}

impl ForecastSummary {
    pub fn from_points(points: &[ForecastPoint]) -> Self {
        let (total_predicted, total_lower, total_upper) =
            points.iter().fold((0.0, 0.0, 0.0), |(p, l, u), point| {
                (
                    p + point.predicted_cost,
                    l + point.lower_bound,
                    u + point.upper_bound,
                )
            });

        let average_predicted = if points.is_empty() {
            0.0
        } else {
            total_predicted / points.len() as f64
        };

        Self {
            periods: points.len(),
            total_predicted,
            total_lower,
            total_upper,
            average_predicted,
        }
    }
}
