//! # costiq
//!
//! Command-line interface for cost trend estimation, forecasting, and
//! anomaly scoring.

mod commands;
mod config;

use std::path::PathBuf;

use anomaly_facade::Severity;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use forecast_facade::ConfidenceLevel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::{AnomalyOptions, ForecastOptions, SeriesInput};
use config::AnalysisConfig;

#[derive(Parser)]
#[command(name = "costiq")]
#[command(about = "Cloud cost forecasting and anomaly scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON analysis config (forecast and monitor sections)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input file (CSV with date,cost columns or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// File to read when the input cannot be loaded
    #[arg(long)]
    fallback: Option<PathBuf>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,
}

impl From<InputArgs> for SeriesInput {
    fn from(args: InputArgs) -> Self {
        SeriesInput {
            path: args.input,
            fallback: args.fallback,
            start: args.start,
            end: args.end,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a linear trend to the cost series
    Trend {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast future costs with confidence bounds
    Forecast {
        #[command(flatten)]
        input: InputArgs,

        /// Number of periods to forecast
        #[arg(short, long)]
        days: usize,

        /// Confidence level (low, medium, high)
        #[arg(short, long, default_value = "medium")]
        confidence: ConfidenceLevel,

        /// Seed for reproducible noise; no noise when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Noise amplitude as a fraction of the projected cost
        #[arg(long)]
        volatility: Option<f64>,

        /// Step forecast dates by calendar month instead of by day
        #[arg(long)]
        monthly: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score each cost against the trailing mean of earlier costs
    Anomalies {
        #[command(flatten)]
        input: InputArgs,

        /// Number of earlier costs averaged into the baseline
        #[arg(short, long)]
        window: Option<usize>,

        /// Deviation percent above which a cost is medium severity
        #[arg(long)]
        medium: Option<f64>,

        /// Deviation percent above which a cost is high severity
        #[arg(long)]
        high: Option<f64>,

        /// Lowest severity reported as an alert (low, medium, high)
        #[arg(long)]
        min_severity: Option<Severity>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "costiq=debug,data_core=debug,forecast_core=debug,anomaly_core=debug"
    } else {
        "costiq=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = AnalysisConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Trend { input, output } => {
            let report = commands::run_trend(&input.into())?;
            commands::write_report(&report, output.as_deref())
        }

        Commands::Forecast {
            input,
            days,
            confidence,
            seed,
            volatility,
            monthly,
            output,
        } => {
            let options = ForecastOptions {
                days,
                confidence,
                seed,
                volatility,
                monthly,
            };
            let report = commands::run_forecast(&input.into(), &config.forecast, &options)?;
            commands::write_report(&report, output.as_deref())
        }

        Commands::Anomalies {
            input,
            window,
            medium,
            high,
            min_severity,
            output,
        } => {
            let options = AnomalyOptions {
                window,
                medium,
                high,
                min_severity,
            };
            let report = commands::run_anomalies(&input.into(), &config, &options)?;
            commands::write_report(&report, output.as_deref())
        }
    }
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_forecast() {
        let cli = Cli::try_parse_from([
            "costiq", "forecast", "--input", "costs.csv", "--days", "14", "--confidence", "HIGH",
            "--seed", "7", "--monthly",
        ])
        .unwrap();

        match cli.command {
            Commands::Forecast {
                input,
                days,
                confidence,
                seed,
                monthly,
                ..
            } => {
                assert_eq!(input.input, PathBuf::from("costs.csv"));
                assert_eq!(days, 14);
                assert_eq!(confidence, ConfidenceLevel::High);
                assert_eq!(seed, Some(7));
                assert!(monthly);
            }
            _ => panic!("expected forecast command"),
        }
    }

    #[test]
    fn test_parse_anomalies_with_global_flags() {
        let cli = Cli::try_parse_from([
            "costiq", "anomalies", "-i", "costs.json", "--min-severity", "low", "--start",
            "2024-01-01", "--config", "costiq.json", "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("costiq.json")));
        match cli.command {
            Commands::Anomalies {
                input, min_severity, ..
            } => {
                assert_eq!(min_severity, Some(Severity::Low));
                assert_eq!(input.start, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            _ => panic!("expected anomalies command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_confidence() {
        let result = Cli::try_parse_from([
            "costiq", "forecast", "-i", "costs.csv", "-d", "3", "-c", "extreme",
        ]);
        assert!(result.is_err());
    }
}
