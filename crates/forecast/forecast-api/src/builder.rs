//! Forecast configuration builder.

use forecast_spi::Result;

use crate::config::{ConfidenceMargins, ForecastConfig, Granularity, Projection, Widening};

/// Builder for [`ForecastConfig`]; `build` validates the result.
#[derive(Debug, Clone, Default)]
pub struct ForecastConfigBuilder {
    config: ForecastConfig,
}

impl ForecastConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margins(mut self, margins: ConfidenceMargins) -> Self {
        self.config.margins = margins;
        self
    }

    pub fn widening(mut self, widening: Widening) -> Self {
        self.config.widening = widening;
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.config.projection = projection;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.granularity = granularity;
        self
    }

    /// Fix the per-step growth rate instead of deriving it from the trend.
    pub fn growth_rate(mut self, rate: f64) -> Self {
        self.config.growth_rate = Some(rate);
        self
    }

    pub fn volatility(mut self, volatility: f64) -> Self {
        self.config.volatility = volatility;
        self
    }

    pub fn build(self) -> Result<ForecastConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ForecastConfigBuilder::new().build().unwrap();
        assert_eq!(config, ForecastConfig::default());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ForecastConfigBuilder::new()
            .margins(ConfidenceMargins::new(0.01, 0.02, 0.03))
            .widening(Widening::None)
            .projection(Projection::Linear)
            .granularity(Granularity::Monthly)
            .growth_rate(0.02)
            .volatility(0.0)
            .build()
            .unwrap();

        assert_eq!(config.margins.high, 0.03);
        assert_eq!(config.widening, Widening::None);
        assert_eq!(config.projection, Projection::Linear);
        assert_eq!(config.granularity, Granularity::Monthly);
        assert_eq!(config.growth_rate, Some(0.02));
        assert_eq!(config.volatility, 0.0);
    }

    #[test]
    fn test_builder_validates() {
        let result = ForecastConfigBuilder::new().volatility(-0.5).build();
        assert!(result.is_err());
    }
}
