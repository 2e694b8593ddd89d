//! Basic example demonstrating anomaly scoring and monitoring
//!
//! Run with: cargo run --example basic -p anomaly-facade

use anomaly_facade::{
    score_anomaly, summarize, AnomalyScorer, CostMonitor, CostPoint, MonitorConfig,
    MonitoringStream, TrailingMean,
};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly-facade Basic Examples ===\n");

    // 1. Single observations
    println!("1. Single observations");
    for (observed, baseline) in [(120.0, 100.0), (300.0, 100.0), (301.0, 100.0), (50.0, 0.0)] {
        let record = score_anomaly(observed, baseline, None)?;
        match record.severity {
            Some(severity) => println!(
                "   {:>6.1} vs {:>6.1}: {:+.1}% ({})",
                observed,
                baseline,
                record.deviation_percent.unwrap_or_default(),
                severity
            ),
            None => println!("   {:>6.1} vs {:>6.1}: undefined baseline", observed, baseline),
        }
    }
    println!();

    let start = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("bad start date")?;
    let values = [410.0, 398.0, 405.0, 420.0, 1_320.0, 415.0, 402.0, 399.0];
    let history: Vec<CostPoint> = start
        .iter_days()
        .zip(values)
        .map(|(date, cost)| CostPoint::new(date, cost))
        .collect();

    // 2. Series against a trailing mean
    let records = AnomalyScorer::default().score_series(&history, &TrailingMean::new(3)?)?;
    let summary = summarize(&records);
    println!("2. Series scoring (trailing mean of 3)");
    println!(
        "   scored={} low={} medium={} high={}\n",
        summary.total, summary.low, summary.medium, summary.high
    );

    // 3. Streaming monitor
    println!("3. Streaming monitor");
    let mut monitor = CostMonitor::new(MonitorConfig::new(3))?;
    for point in &history {
        if let Some(alert) = monitor.push(*point)? {
            println!("   {}", alert.message);
        }
    }

    Ok(())
}
