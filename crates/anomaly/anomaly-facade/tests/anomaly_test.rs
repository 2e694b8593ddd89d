//! Unit tests for the anomaly facade helpers

use anomaly_facade::{score_anomaly, AnomalyError, Severity, SeverityThresholds};

#[test]
fn test_exactly_double_deviation_is_medium() {
    let record = score_anomaly(300.0, 100.0, None).unwrap();
    assert_eq!(record.deviation_percent, Some(200.0));
    assert_eq!(record.severity, Some(Severity::Medium));
}

#[test]
fn test_just_over_double_is_high() {
    let record = score_anomaly(301.0, 100.0, None).unwrap();
    assert_eq!(record.severity, Some(Severity::High));
}

#[test]
fn test_zero_baseline_is_flagged() {
    let record = score_anomaly(100.0, 0.0, None).unwrap();
    assert!(record.undefined_baseline);
    assert_eq!(record.deviation_percent, None);
    assert_eq!(record.severity, None);
}

#[test]
fn test_zero_over_zero_is_flagged() {
    let record = score_anomaly(0.0, 0.0, None).unwrap();
    assert!(record.undefined_baseline);
}

#[test]
fn test_deviation_is_never_infinite() {
    for (observed, baseline) in [(1e300, 1e-300), (5.0, 1e-12), (0.0, 3.0)] {
        match score_anomaly(observed, baseline, None) {
            Ok(record) => {
                let deviation = record.deviation_percent.unwrap();
                assert!(deviation.is_finite());
            }
            Err(err) => assert!(err.is_invalid_input()),
        }
    }
}

#[test]
fn test_negative_inputs_rejected() {
    assert!(matches!(
        score_anomaly(-5.0, 100.0, None),
        Err(AnomalyError::InvalidInput(_))
    ));
    assert!(matches!(
        score_anomaly(5.0, -100.0, None),
        Err(AnomalyError::InvalidInput(_))
    ));
}

#[test]
fn test_custom_thresholds() {
    let thresholds = SeverityThresholds::new(20.0, 50.0);
    let record = score_anomaly(130.0, 100.0, Some(thresholds)).unwrap();
    assert_eq!(record.severity, Some(Severity::Medium));
}

#[test]
fn test_invalid_thresholds() {
    let err = score_anomaly(1.0, 1.0, Some(SeverityThresholds::new(f64::NAN, 10.0))).unwrap_err();
    assert!(matches!(err, AnomalyError::InvalidConfig { .. }));
    assert!(!err.is_invalid_input());
}
