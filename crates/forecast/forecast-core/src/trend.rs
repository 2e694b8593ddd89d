//! Least-squares trend estimation
//!
//! Fits `cost ≈ slope * t + intercept` where `t` is the position in the
//! series (0, 1, 2, ...).
//!
//! ## Short series
//!
//! - one point: `slope = 0`, `intercept` = that cost
//! - no points: `slope = 0`, `intercept = 0`
//!
//! Callers that need data (the forecast generator) reject empty input
//! themselves.

use data_spi::{validate_series, CostPoint};
use forecast_spi::{ForecastError, Result, TrendEstimator, TrendModel};

/// Ordinary least squares over series positions.
///
/// Single pass, constant extra space. Costs are accumulated relative to
/// the first observation, so a constant series fits to exactly
/// `slope == 0` and `intercept == c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresTrend;

impl LeastSquaresTrend {
    pub fn new() -> Self {
        Self
    }
}

impl TrendEstimator for LeastSquaresTrend {
    fn estimate(&self, series: &[CostPoint]) -> Result<TrendModel> {
        validate_series(series)?;
        let trend = fit_line(series.iter().map(|p| p.cost), series.len());
        if !trend.slope.is_finite() || !trend.intercept.is_finite() {
            return Err(ForecastError::InvalidInput(
                "cost values too large to fit a trend".to_string(),
            ));
        }
        tracing::debug!(
            points = series.len(),
            slope = trend.slope,
            intercept = trend.intercept,
            "estimated cost trend"
        );
        Ok(trend)
    }
}

fn fit_line<I>(mut values: I, n: usize) -> TrendModel
where
    I: Iterator<Item = f64>,
{
    let first = match values.next() {
        Some(first) => first,
        None => return TrendModel::flat(0.0),
    };
    if n < 2 {
        return TrendModel::flat(first);
    }

    let n_f = n as f64;
    let mean_t = (n_f - 1.0) / 2.0;

    // t = 0 contributes (0 - mean_t) * 0 to both sums
    let mut sum_ty = 0.0;
    let mut sum_dy = 0.0;
    for (t, y) in values.enumerate() {
        let dy = y - first;
        sum_ty += ((t + 1) as f64 - mean_t) * dy;
        sum_dy += dy;
    }

    // Sum of (t - mean_t)^2 over 0..n
    let sum_tt = n_f * (n_f * n_f - 1.0) / 12.0;

    let slope = sum_ty / sum_tt;
    let intercept = first + sum_dy / n_f - slope * mean_t;

    TrendModel::new(slope, intercept)
}
