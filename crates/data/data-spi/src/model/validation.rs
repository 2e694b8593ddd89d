//! Series validation.

use crate::error::SeriesError;

use super::CostPoint;

/// Check that every cost is finite and non-negative and that dates are
/// strictly increasing.
///
/// An empty series passes; callers that need data check emptiness
/// themselves.
pub fn validate_series(points: &[CostPoint]) -> Result<(), SeriesError> {
    for (index, point) in points.iter().enumerate() {
        validate_cost(index, point.cost)?;
    }

    if let Some(index) = points
        .windows(2)
        .position(|w| w[1].date <= w[0].date)
    {
        return Err(SeriesError::OutOfOrder { index: index + 1 });
    }

    Ok(())
}

/// Validate a non-empty series.
pub fn validate_non_empty(points: &[CostPoint]) -> Result<(), SeriesError> {
    if points.is_empty() {
        return Err(SeriesError::Empty);
    }
    validate_series(points)
}

/// Check a single cost value. `index` is reported back in the error.
pub fn validate_cost(index: usize, cost: f64) -> Result<(), SeriesError> {
    if !cost.is_finite() {
        return Err(SeriesError::NonFiniteCost { index });
    }
    if cost < 0.0 {
        return Err(SeriesError::NegativeCost { index, cost });
    }
    Ok(())
}
