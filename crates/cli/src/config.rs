//! Analysis configuration file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anomaly_facade::MonitorConfig;
use anyhow::{Context, Result};
use forecast_facade::ForecastConfig;
use serde::{Deserialize, Serialize};

/// Settings for every command, read from a JSON file.
///
/// Missing sections fall back to their defaults; command-line flags
/// override individual values afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub forecast: ForecastConfig,
    /// Baseline window, alert severity and severity thresholds
    pub monitor: MonitorConfig,
}

impl AnalysisConfig {
    /// Load from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded analysis config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.forecast.validate().context("invalid forecast config")?;
        self.monitor.validate().context("invalid monitor config")?;
        Ok(())
    }
}
