//! Unit tests for the forecast facade helpers

use chrono::NaiveDate;
use forecast_facade::{
    estimate_trend, generate_forecast, summarize, ConfidenceLevel, CostPoint, ForecastError,
    SeriesError, TrendModel,
};

fn series(values: &[f64]) -> Vec<CostPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    data_spi::daily_series(start, values).unwrap()
}

// ============================================================================
// Trend Tests
// ============================================================================

#[test]
fn test_strictly_increasing_has_positive_slope() {
    let cases: Vec<Vec<f64>> = vec![
        vec![0.0, 0.001],
        vec![1.0, 2.0, 4.0, 8.0, 16.0],
        vec![100.0, 100.5, 250.0, 251.0],
        (0..50).map(|i| (i as f64).sqrt()).collect(),
    ];

    for values in cases {
        let trend = estimate_trend(&series(&values)).unwrap();
        assert!(trend.slope > 0.0, "slope {} for {:?}", trend.slope, values);
    }
}

#[test]
fn test_constant_series() {
    let trend = estimate_trend(&series(&[37.25; 12])).unwrap();
    assert_eq!(trend.slope, 0.0);
    assert_eq!(trend.intercept, 37.25);
}

#[test]
fn test_short_series_policy() {
    assert_eq!(estimate_trend(&[]).unwrap(), TrendModel::flat(0.0));
    assert_eq!(estimate_trend(&series(&[9.0])).unwrap(), TrendModel::flat(9.0));
}

// ============================================================================
// Forecast Tests
// ============================================================================

#[test]
fn test_forecast_length_and_dates() {
    let points = generate_forecast(&series(&[10.0, 12.0, 11.0]), 30, ConfidenceLevel::Low).unwrap();
    assert_eq!(points.len(), 30);
    assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    assert_eq!(points[29].date, NaiveDate::from_ymd_opt(2024, 7, 3).unwrap());
}

#[test]
fn test_forecast_rejects_bad_input() {
    assert_eq!(
        generate_forecast(&[], 3, ConfidenceLevel::Medium).unwrap_err(),
        ForecastError::Series(SeriesError::Empty)
    );
    assert!(generate_forecast(&series(&[1.0]), 0, ConfidenceLevel::Medium)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_summarize() {
    let points = generate_forecast(&series(&[50.0, 50.0]), 4, ConfidenceLevel::Medium).unwrap();
    let summary = summarize(&points);

    assert_eq!(summary.periods, 4);
    assert!((summary.total_predicted - 200.0).abs() < 1e-9);
    assert!((summary.average_predicted - 50.0).abs() < 1e-9);
    assert!(summary.total_lower < summary.total_predicted);
    assert!(summary.total_upper > summary.total_predicted);
}

#[test]
fn test_forecast_points_serialize() {
    let points = generate_forecast(&series(&[10.0, 20.0]), 1, ConfidenceLevel::High).unwrap();
    let json = serde_json::to_value(&points).unwrap();

    assert_eq!(json[0]["date"], "2024-06-03");
    assert!(json[0]["predicted_cost"].is_number());
    assert!(json[0]["lower_bound"].is_number());
    assert!(json[0]["upper_bound"].is_number());
}
