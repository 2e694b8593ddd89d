//! Forecast generation
//!
//! Carries a fitted trend forward from the last observed cost and puts a
//! confidence band around every projected point.
//!
//! For step `i` (1-based):
//!
//! 1. project: `last * (1 + r)^i` (compound, `r = slope / last`) or
//!    `last + slope * i` (linear)
//! 2. jitter: multiply by `1 + volatility * noise`, noise in `[-1, 1]`
//! 3. band: half-width `predicted * margin(level) * widening(i)`, lower
//!    bound clamped at zero
//!
//! Noise is applied per point and never feeds back into later steps.

use chrono::{Days, Months, NaiveDate};
use data_spi::validate_non_empty;
use forecast_api::{ForecastConfig, Granularity, Projection};
use forecast_spi::{
    ConfidenceLevel, CostPoint, ForecastError, ForecastPoint, NoiseSource, Result,
    SeriesError, TrendEstimator, TrendModel,
};

use crate::noise::NoNoise;
use crate::trend::LeastSquaresTrend;

/// Produces dated forecast points with confidence bands.
#[derive(Debug, Clone)]
pub struct ForecastGenerator<E = LeastSquaresTrend> {
    config: ForecastConfig,
    estimator: E,
}

impl ForecastGenerator {
    /// Create a generator using least-squares trend estimation.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        Self::with_estimator(config, LeastSquaresTrend)
    }
}

impl Default for ForecastGenerator {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            estimator: LeastSquaresTrend,
        }
    }
}

impl<E: TrendEstimator> ForecastGenerator<E> {
    /// Create a generator with a custom trend estimator.
    pub fn with_estimator(config: ForecastConfig, estimator: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Trend the generator would use for `series`.
    pub fn trend(&self, series: &[CostPoint]) -> Result<TrendModel> {
        self.estimator.estimate(series)
    }

    /// Forecast `days` periods without noise.
    pub fn generate(
        &self,
        series: &[CostPoint],
        days: usize,
        level: ConfidenceLevel,
    ) -> Result<Vec<ForecastPoint>> {
        self.generate_with_noise(series, days, level, &mut NoNoise)
    }

    /// Forecast `days` periods, drawing jitter from `noise`.
    pub fn generate_with_noise<N: NoiseSource>(
        &self,
        series: &[CostPoint],
        days: usize,
        level: ConfidenceLevel,
        noise: &mut N,
    ) -> Result<Vec<ForecastPoint>> {
        check_request(series, days)?;
        let trend = self.estimator.estimate(series)?;
        self.project(series, &trend, days, level, noise)
    }

    /// Forecast from a trend computed elsewhere.
    pub fn generate_from_trend<N: NoiseSource>(
        &self,
        series: &[CostPoint],
        trend: &TrendModel,
        days: usize,
        level: ConfidenceLevel,
        noise: &mut N,
    ) -> Result<Vec<ForecastPoint>> {
        check_request(series, days)?;
        if !trend.slope.is_finite() || !trend.intercept.is_finite() {
            return Err(ForecastError::InvalidInput(
                "trend slope and intercept must be finite".to_string(),
            ));
        }
        self.project(series, trend, days, level, noise)
    }

    fn project<N: NoiseSource>(
        &self,
        series: &[CostPoint],
        trend: &TrendModel,
        days: usize,
        level: ConfidenceLevel,
        noise: &mut N,
    ) -> Result<Vec<ForecastPoint>> {
        let last = series.last().copied().ok_or(SeriesError::Empty)?;
        let margin = self.config.margins.margin(level);

        tracing::debug!(
            history = series.len(),
            days,
            level = %level,
            slope = trend.slope,
            margin,
            "generating cost forecast"
        );

        let mut points = Vec::with_capacity(days);
        for step in 1..=days {
            let projected = self.projected_cost(last.cost, trend.slope, step);
            let sample = noise.sample();
            if !sample.is_finite() {
                return Err(ForecastError::InvalidInput(format!(
                    "noise sample at step {} is not finite",
                    step
                )));
            }
            let jitter = 1.0 + self.config.volatility * sample.clamp(-1.0, 1.0);
            let raw = projected * jitter;

            // f64::max swallows NaN, so check before clamping
            if !raw.is_finite() {
                return Err(ForecastError::InvalidInput(format!(
                    "projected cost overflowed at step {}",
                    step
                )));
            }
            let predicted = raw.max(0.0);

            let half_width = predicted * margin * self.config.widening.factor(step);
            points.push(ForecastPoint {
                date: self.step_date(last.date, step)?,
                predicted_cost: predicted,
                lower_bound: (predicted - half_width).max(0.0),
                upper_bound: predicted + half_width,
            });
        }

        Ok(points)
    }

    fn projected_cost(&self, last: f64, slope: f64, step: usize) -> f64 {
        let linear = || (last + slope * step as f64).max(0.0);

        match self.config.projection {
            Projection::Linear => linear(),
            // Compounding from zero stays at zero; follow the slope instead.
            Projection::Compound if last <= 0.0 => linear(),
            Projection::Compound => {
                let rate = self.config.growth_rate.unwrap_or(slope / last).max(-1.0);
                last * (1.0 + rate).powf(step as f64)
            }
        }
    }

    fn step_date(&self, last: NaiveDate, step: usize) -> Result<NaiveDate> {
        let date = match self.config.granularity {
            Granularity::Daily => last.checked_add_days(Days::new(step as u64)),
            Granularity::Monthly => u32::try_from(step)
                .ok()
                .and_then(|months| last.checked_add_months(Months::new(months))),
        };

        date.ok_or_else(|| {
            ForecastError::InvalidInput(format!(
                "forecast date overflows the calendar at step {}",
                step
            ))
        })
    }
}

fn check_request(series: &[CostPoint], days: usize) -> Result<()> {
    if days == 0 {
        return Err(ForecastError::InvalidInput(
            "days must be positive".to_string(),
        ));
    }
    validate_non_empty(series)?;
    Ok(())
}
