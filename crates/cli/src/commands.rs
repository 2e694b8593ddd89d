//! Command implementations.
//!
//! Each command loads a cost series, runs the analysis, and returns a
//! serializable report. Writing the report is left to the caller.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anomaly_facade::{
    create_alert, summarize as summarize_anomalies, AnomalyRecord, AnomalyScorer, AnomalySummary,
    CostAlert, Severity, SeverityThresholds, TrailingMean,
};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use data_core::{FallbackSource, FileSource};
use data_spi::{CostPoint, DataSource, SeriesQuery};
use forecast_facade::{
    summarize as summarize_forecast, ConfidenceLevel, ForecastConfig, ForecastGenerator,
    ForecastPoint, ForecastSummary, Granularity, SeededNoise, TrendDirection, TrendModel,
};
use serde::Serialize;

use crate::config::AnalysisConfig;

/// Where the cost series comes from.
#[derive(Debug, Clone, Default)]
pub struct SeriesInput {
    pub path: PathBuf,
    pub fallback: Option<PathBuf>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SeriesInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    fn query(&self) -> SeriesQuery {
        SeriesQuery {
            scope: None,
            start: self.start,
            end: self.end,
        }
    }

    /// Fetch the series, trying the fallback file when the primary fails.
    pub fn load(&self) -> Result<Vec<CostPoint>> {
        let primary = FileSource::open(&self.path)
            .with_context(|| format!("unsupported input file {}", self.path.display()))?;
        let query = self.query();

        let points = match &self.fallback {
            Some(fallback) => {
                let secondary = FileSource::open(fallback)
                    .with_context(|| format!("unsupported fallback file {}", fallback.display()))?;
                FallbackSource::new(primary, secondary).fetch(&query)
            }
            None => primary.fetch(&query),
        }
        .with_context(|| format!("failed to load cost series from {}", self.path.display()))?;

        tracing::info!(points = points.len(), "loaded cost series");
        Ok(points)
    }
}

#[derive(Debug, Serialize)]
pub struct TrendReport {
    pub points: usize,
    pub trend: TrendModel,
    pub direction: TrendDirection,
}

pub fn run_trend(input: &SeriesInput) -> Result<TrendReport> {
    let series = input.load()?;
    let trend = forecast_facade::estimate_trend(&series).context("trend estimation failed")?;

    Ok(TrendReport {
        points: series.len(),
        direction: trend.direction(),
        trend,
    })
}

/// Forecast knobs taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ForecastOptions {
    pub days: usize,
    pub confidence: ConfidenceLevel,
    pub seed: Option<u64>,
    pub volatility: Option<f64>,
    pub monthly: bool,
}

#[derive(Debug, Serialize)]
pub struct ForecastReport {
    pub confidence: ConfidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub trend: TrendModel,
    pub forecast: Vec<ForecastPoint>,
    pub summary: ForecastSummary,
}

pub fn run_forecast(
    input: &SeriesInput,
    base: &ForecastConfig,
    options: &ForecastOptions,
) -> Result<ForecastReport> {
    let mut config = base.clone();
    if let Some(volatility) = options.volatility {
        config.volatility = volatility;
    }
    if options.monthly {
        config.granularity = Granularity::Monthly;
    }

    let generator = ForecastGenerator::new(config).context("invalid forecast settings")?;
    let series = input.load()?;
    let trend = generator.trend(&series).context("trend estimation failed")?;

    let forecast = match options.seed {
        Some(seed) => generator.generate_from_trend(
            &series,
            &trend,
            options.days,
            options.confidence,
            &mut SeededNoise::new(seed),
        ),
        None => generator.generate(&series, options.days, options.confidence),
    }
    .context("forecast generation failed")?;

    tracing::info!(
        periods = forecast.len(),
        confidence = %options.confidence,
        "generated forecast"
    );

    Ok(ForecastReport {
        confidence: options.confidence,
        seed: options.seed,
        trend,
        summary: summarize_forecast(&forecast),
        forecast,
    })
}

/// Anomaly knobs taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct AnomalyOptions {
    pub window: Option<usize>,
    pub medium: Option<f64>,
    pub high: Option<f64>,
    pub min_severity: Option<Severity>,
}

#[derive(Debug, Serialize)]
pub struct AnomalyReport {
    pub window: usize,
    pub thresholds: SeverityThresholds,
    pub min_severity: Severity,
    pub records: Vec<AnomalyRecord>,
    pub summary: AnomalySummary,
    pub alerts: Vec<CostAlert>,
}

pub fn run_anomalies(
    input: &SeriesInput,
    config: &AnalysisConfig,
    options: &AnomalyOptions,
) -> Result<AnomalyReport> {
    let mut thresholds = config.monitor.thresholds;
    if let Some(medium) = options.medium {
        thresholds.medium = medium;
    }
    if let Some(high) = options.high {
        thresholds.high = high;
    }
    let window = options.window.unwrap_or(config.monitor.window);
    let min_severity = options.min_severity.unwrap_or(config.monitor.min_severity);

    let scorer = AnomalyScorer::new(thresholds).context("invalid severity thresholds")?;
    let rule = TrailingMean::new(window).context("invalid baseline window")?;

    let series = input.load()?;
    if series.len() < 2 {
        bail!("at least two cost points are needed to score anomalies");
    }
    let records = scorer
        .score_series(&series, &rule)
        .context("anomaly scoring failed")?;

    let alerts: Vec<CostAlert> = records
        .iter()
        .filter(|r| r.is_at_least(min_severity))
        .filter_map(create_alert)
        .collect();

    tracing::info!(
        scored = records.len(),
        alerts = alerts.len(),
        min_severity = %min_severity,
        "scored cost anomalies"
    );

    Ok(AnomalyReport {
        window,
        thresholds,
        min_severity,
        summary: summarize_anomalies(&records),
        records,
        alerts,
    })
}

/// Write `report` as pretty JSON to `output`, or stdout when absent.
pub fn write_report<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, report).context("failed to write JSON")?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, report).context("failed to write JSON")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
