//! Streaming cost monitor.

use anomaly_api::MonitorConfig;
use anomaly_spi::{AnomalyError, CostAlert, MonitoringStream, Result};
use chrono::NaiveDate;
use data_spi::CostPoint;

use super::alerting::alert_for_point;
use super::baseline::mean;
use super::scorer::AnomalyScorer;

/// Scores each pushed point against the mean of the preceding window.
///
/// The first point has nothing to compare against and never alerts.
#[derive(Debug, Clone)]
pub struct CostMonitor {
    scorer: AnomalyScorer,
    config: MonitorConfig,
    buffer: Vec<f64>,
    last_date: Option<NaiveDate>,
}

impl CostMonitor {
    /// Create a monitor from configuration.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: AnomalyScorer::new(config.thresholds)?,
            buffer: Vec::with_capacity(config.window),
            config,
            last_date: None,
        })
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Baseline the next point would be scored against.
    pub fn current_baseline(&self) -> Option<f64> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(mean(self.buffer.iter().copied()))
        }
    }

    fn check_order(&self, date: NaiveDate) -> Result<()> {
        match self.last_date {
            Some(last) if date <= last => Err(AnomalyError::InvalidInput(format!(
                "point dated {} is not after {}",
                date, last
            ))),
            _ => Ok(()),
        }
    }
}

impl MonitoringStream for CostMonitor {
    fn push(&mut self, point: CostPoint) -> Result<Option<CostAlert>> {
        self.check_order(point.date)?;

        let alert = match self.current_baseline() {
            Some(baseline) => {
                let record = self.scorer.score_point(&point, baseline)?;
                if record.is_at_least(self.config.min_severity) {
                    alert_for_point(&point, &record)
                } else {
                    None
                }
            }
            None => {
                data_spi::validate_cost(0, point.cost)?;
                None
            }
        };

        self.buffer.push(point.cost);
        if self.buffer.len() > self.config.window {
            self.buffer.remove(0);
        }
        self.last_date = Some(point.date);

        if let Some(alert) = &alert {
            tracing::debug!(
                date = %alert.date,
                severity = %alert.severity,
                deviation = alert.deviation_percent,
                "cost alert raised"
            );
        }
        Ok(alert)
    }

    fn window(&self) -> &[f64] {
        &self.buffer
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.last_date = None;
    }
}
