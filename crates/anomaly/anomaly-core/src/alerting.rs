//! Alert construction.

use anomaly_spi::{AnomalyRecord, CostAlert};
use data_spi::CostPoint;

/// Build an alert for a scored observation.
///
/// Returns `None` for records without a severity (undefined baseline) or
/// without a date.
pub fn create_alert(record: &AnomalyRecord) -> Option<CostAlert> {
    let date = record.date?;
    let severity = record.severity?;
    let deviation = record.deviation_percent?;

    let direction = if deviation >= 0.0 { "above" } else { "below" };
    let message = format!(
        "{} cost anomaly on {}: observed {:.2} is {:.1}% {} baseline {:.2}",
        severity,
        date,
        record.observed_cost,
        deviation.abs(),
        direction,
        record.baseline_cost
    );

    Some(CostAlert {
        date,
        observed_cost: record.observed_cost,
        baseline_cost: record.baseline_cost,
        deviation_percent: deviation,
        severity,
        message,
    })
}

/// Alert for a point scored against a baseline, if the record qualifies.
pub fn alert_for_point(point: &CostPoint, record: &AnomalyRecord) -> Option<CostAlert> {
    create_alert(&record.with_date(point.date))
}
