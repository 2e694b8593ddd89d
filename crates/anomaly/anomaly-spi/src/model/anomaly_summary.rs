//! Batch scoring summary.

use serde::{Deserialize, Serialize};

use super::{AnomalyRecord, Severity};

/// Counts over a batch of anomaly records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalySummary {
    /// Records scored
    pub total: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    /// Records flagged for a zero baseline
    pub undefined_baseline: usize,
}

impl AnomalySummary {
    /// Tally a batch of records.
    pub fn from_records(records: &[AnomalyRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            match record.severity {
                Some(Severity::Low) => summary.low += 1,
                Some(Severity::Medium) => summary.medium += 1,
                Some(Severity::High) => summary.high += 1,
                None => summary.undefined_baseline += 1,
            }
        }

        summary
    }

    /// Records with severity of at least `min`.
    pub fn count_at_least(&self, min: Severity) -> usize {
        match min {
            Severity::Low => self.low + self.medium + self.high,
            Severity::Medium => self.medium + self.high,
            Severity::High => self.high,
        }
    }
}

/// Indices of records with severity of at least `min`.
pub fn flagged_indices(records: &[AnomalyRecord], min: Severity) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| if r.is_at_least(min) { Some(i) } else { None })
        .collect()
}
