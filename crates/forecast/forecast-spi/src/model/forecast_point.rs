//! Forecast point model

use chrono::NaiveDate;
use data_spi::CostPoint;
use serde::{Deserialize, Serialize};

/// One forecasted period with its confidence band.
///
/// Generators guarantee `lower_bound <= predicted_cost <= upper_bound`
/// and that all three are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecasted period
    pub date: NaiveDate,
    /// Point forecast
    pub predicted_cost: f64,
    /// Lower bound of confidence band
    pub lower_bound: f64,
    /// Upper bound of confidence band
    pub upper_bound: f64,
}

impl ForecastPoint {
    /// Width of the confidence band.
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Whether `cost` falls inside the band (inclusive).
    pub fn contains(&self, cost: f64) -> bool {
        cost >= self.lower_bound && cost <= self.upper_bound
    }

    /// The point forecast as a plain cost observation.
    pub fn as_cost_point(&self) -> CostPoint {
        CostPoint::new(self.date, self.predicted_cost)
    }
}
