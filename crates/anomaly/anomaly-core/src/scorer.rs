//! Deviation scoring against a baseline.
//!
//! `deviation = (observed - baseline) / baseline * 100`, tiered by the
//! magnitude of the deviation. A zero baseline yields a record flagged
//! `undefined_baseline` instead of an infinite deviation.

use anomaly_api::SeverityThresholds;
use anomaly_spi::{AnomalyError, AnomalyRecord, AnomalySummary, Baseline, Result};
use data_spi::{validate_cost, validate_series, CostPoint};

/// Scores observed costs against expected baselines.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnomalyScorer {
    thresholds: SeverityThresholds,
}

impl AnomalyScorer {
    /// Create a scorer, rejecting invalid thresholds.
    pub fn new(thresholds: SeverityThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &SeverityThresholds {
        &self.thresholds
    }

    /// Score one observation.
    pub fn score(&self, observed: f64, baseline: f64) -> Result<AnomalyRecord> {
        check_cost("observed cost", observed)?;
        check_cost("baseline cost", baseline)?;

        if baseline == 0.0 {
            return Ok(AnomalyRecord::undefined(observed));
        }

        let deviation = (observed - baseline) / baseline * 100.0;
        if !deviation.is_finite() {
            return Err(AnomalyError::InvalidInput(format!(
                "deviation of {} from baseline {} is not representable",
                observed, baseline
            )));
        }

        let severity = self.thresholds.severity_for(deviation);
        Ok(AnomalyRecord::scored(observed, baseline, deviation, severity))
    }

    /// Score a dated observation; the record carries the date.
    pub fn score_point(&self, point: &CostPoint, baseline: f64) -> Result<AnomalyRecord> {
        self.score(point.cost, baseline)
            .map(|record| record.with_date(point.date))
    }

    /// Score each point against the baseline at the same index.
    pub fn score_batch(
        &self,
        points: &[CostPoint],
        baselines: &[f64],
    ) -> Result<Vec<AnomalyRecord>> {
        if points.len() != baselines.len() {
            return Err(AnomalyError::LengthMismatch {
                points: points.len(),
                baselines: baselines.len(),
            });
        }

        for (index, point) in points.iter().enumerate() {
            validate_cost(index, point.cost)?;
        }

        let records = points
            .iter()
            .zip(baselines)
            .enumerate()
            .map(|(index, (point, &baseline))| {
                self.score_point(point, baseline).map_err(|err| match err {
                    AnomalyError::InvalidInput(reason) => {
                        AnomalyError::InvalidInput(format!("index {}: {}", index, reason))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(points = records.len(), "scored cost batch");
        Ok(records)
    }

    /// Score a series against baselines supplied by `rule`.
    ///
    /// Points the rule has no baseline for (typically the first) are
    /// skipped, so the output may be shorter than the input.
    pub fn score_series(
        &self,
        points: &[CostPoint],
        rule: &dyn Baseline,
    ) -> Result<Vec<AnomalyRecord>> {
        validate_series(points)?;

        let mut records = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            if let Some(baseline) = rule.baseline_at(points, index) {
                records.push(self.score_point(point, baseline)?);
            }
        }

        tracing::debug!(
            points = points.len(),
            scored = records.len(),
            "scored cost series"
        );
        Ok(records)
    }
}

/// Tally records by severity.
pub fn summarize(records: &[AnomalyRecord]) -> AnomalySummary {
    AnomalySummary::from_records(records)
}

fn check_cost(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnomalyError::InvalidInput(format!(
            "{} must be a finite non-negative value, got {}",
            name, value
        )));
    }
    Ok(())
}
