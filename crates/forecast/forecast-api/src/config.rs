//! Forecast configuration types.

use forecast_spi::{ConfidenceLevel, ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Margin fraction of the predicted cost used for each confidence level.
///
/// The defaults (5%, 10%, 20%) are reasonable starting values, not
/// business rules. Margins must be non-decreasing from low to high so a
/// higher level never yields a narrower band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceMargins {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ConfidenceMargins {
    fn default() -> Self {
        Self {
            low: 0.05,
            medium: 0.10,
            high: 0.20,
        }
    }
}

impl ConfidenceMargins {
    pub fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Margin fraction for `level`.
    pub fn margin(&self, level: ConfidenceLevel) -> f64 {
        match level {
            ConfidenceLevel::Low => self.low,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::High => self.high,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("margins.low", self.low),
            ("margins.medium", self.medium),
            ("margins.high", self.high),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::config(
                    name,
                    format!("must be a finite non-negative fraction, got {}", value),
                ));
            }
        }
        if self.medium < self.low {
            return Err(ForecastError::config("margins.medium", "must not be below low"));
        }
        if self.high < self.medium {
            return Err(ForecastError::config("margins.high", "must not be below medium"));
        }
        Ok(())
    }
}

/// How the confidence band grows with forecast horizon.
///
/// Independent of the confidence level: the band half-width is
/// `predicted * margin(level) * factor(step)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widening {
    /// Same width at every step
    None,
    /// `1 + per_step * (step - 1)`
    Linear { per_step: f64 },
    /// `sqrt(step)`
    Sqrt,
}

impl Default for Widening {
    fn default() -> Self {
        Widening::Linear { per_step: 0.1 }
    }
}

impl Widening {
    /// Multiplier applied to the margin at 1-based `step`.
    pub fn factor(&self, step: usize) -> f64 {
        let step = step.max(1) as f64;
        match *self {
            Widening::None => 1.0,
            Widening::Linear { per_step } => 1.0 + per_step * (step - 1.0),
            Widening::Sqrt => step.sqrt(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Widening::Linear { per_step } = *self {
            if !per_step.is_finite() || per_step < 0.0 {
                return Err(ForecastError::config(
                    "widening.per_step",
                    format!("must be finite and non-negative, got {}", per_step),
                ));
            }
        }
        Ok(())
    }
}

/// How the trend is carried forward from the last observed cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// `last * (1 + rate)^step` with `rate = slope / last`
    #[default]
    Compound,
    /// `last + slope * step`
    Linear,
}

/// Spacing of forecasted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Monthly,
}

/// Configuration for the forecast generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Margin fraction per confidence level
    pub margins: ConfidenceMargins,
    /// Band growth with horizon
    pub widening: Widening,
    /// Trend carry-forward model
    pub projection: Projection,
    /// Date spacing of forecast points
    pub granularity: Granularity,
    /// Per-step growth rate overriding the trend-derived one (compound only)
    pub growth_rate: Option<f64>,
    /// Amplitude of injected noise as a fraction of the projected cost
    pub volatility: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            margins: ConfidenceMargins::default(),
            widening: Widening::default(),
            projection: Projection::default(),
            granularity: Granularity::default(),
            growth_rate: None,
            volatility: 0.05,
        }
    }
}

impl ForecastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.margins.validate()?;
        self.widening.validate()?;

        if let Some(rate) = self.growth_rate {
            if !rate.is_finite() || rate < -1.0 {
                return Err(ForecastError::config(
                    "growth_rate",
                    format!("must be finite and at least -1, got {}", rate),
                ));
            }
        }

        if !self.volatility.is_finite() || !(0.0..=1.0).contains(&self.volatility) {
            return Err(ForecastError::config(
                "volatility",
                format!("must be within [0, 1], got {}", self.volatility),
            ));
        }

        Ok(())
    }
}
