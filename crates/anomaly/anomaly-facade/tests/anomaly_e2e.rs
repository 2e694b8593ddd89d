//! End-to-end tests for anomaly-facade
//!
//! Runs complete scoring and monitoring workflows using only the facade's
//! public API.

use anomaly_facade::{
    score_anomaly, AnomalyRecord, AnomalyScorer, CostMonitor, MonitorConfig, MonitoringStream,
    Severity, SeverityThresholds, TrailingMean,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn e2e_month_of_costs_with_one_spike() {
    let mut costs: Vec<f64> = (0..30).map(|i| 1_000.0 + (i % 5) as f64 * 10.0).collect();
    costs[20] = 3_500.0;
    let points = data_spi::daily_series(date(2024, 4, 1), &costs).unwrap();

    let records = AnomalyScorer::default()
        .score_series(&points, &TrailingMean::new(7).unwrap())
        .unwrap();

    let flagged: Vec<&AnomalyRecord> = records
        .iter()
        .filter(|r| r.is_at_least(Severity::Medium))
        .collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].date, Some(date(2024, 4, 21)));
    assert_eq!(flagged[0].severity, Some(Severity::High));
}

#[test]
fn e2e_streaming_alerts() {
    let mut monitor = CostMonitor::new(MonitorConfig::default()).unwrap();
    let costs = [200.0, 210.0, 190.0, 205.0, 640.0, 200.0];

    let mut alerts = Vec::new();
    for (day, cost) in (1..).zip(costs) {
        let point = data_spi::CostPoint::new(date(2024, 9, day), cost);
        if let Some(alert) = monitor.push(point).unwrap() {
            alerts.push(alert);
        }
    }

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].date, date(2024, 9, 5));
    assert_eq!(alerts[0].severity, Severity::High);
    assert!(alerts[0].message.contains("above baseline"));
}

#[test]
fn e2e_records_serialize_to_json() {
    let record = score_anomaly(100.0, 0.0, None).unwrap();
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["undefined_baseline"], true);
    assert!(json["deviation_percent"].is_null());
    assert!(json.get("date").is_none());

    let record = score_anomaly(250.0, 100.0, None)
        .unwrap()
        .with_date(date(2024, 1, 31));
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["severity"], "medium");
    assert_eq!(json["date"], "2024-01-31");
}

#[test]
fn e2e_thresholds_from_json() {
    let thresholds: SeverityThresholds = serde_json::from_str(r#"{"medium": 25}"#).unwrap();
    assert_eq!(thresholds.high, 200.0);

    let record = score_anomaly(130.0, 100.0, Some(thresholds)).unwrap();
    assert_eq!(record.severity, Some(Severity::Medium));
}
