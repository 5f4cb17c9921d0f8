use std::collections::HashSet;

use serde::Serialize;

use vitalrisk_core::models::prediction::Prediction;

/// Headline numbers above the history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    pub average_age: f64,
    pub latest_date: jiff::civil::Date,
    pub unique_patients: usize,
}

impl HistoryStats {
    /// `None` for an empty history.
    pub fn from_predictions(predictions: &[Prediction]) -> Option<Self> {
        let latest = predictions.iter().map(|p| p.created_at).max()?;
        let total = predictions.len();
        let age_sum: f64 = predictions.iter().map(|p| f64::from(p.record.age)).sum();
        let unique_patients = predictions
            .iter()
            .map(|p| p.record.patient_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        Some(Self {
            total,
            average_age: age_sum / total as f64,
            latest_date: utc_date(latest),
            unique_patients,
        })
    }
}

/// Calendar date of a timestamp, in UTC.
pub fn utc_date(ts: jiff::Timestamp) -> jiff::civil::Date {
    ts.to_zoned(jiff::tz::TimeZone::UTC).date()
}
