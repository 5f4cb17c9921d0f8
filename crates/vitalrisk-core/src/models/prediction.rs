use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::disease::RiskAssessment;
use super::patient::PatientRecord;

/// A stored, scored submission. Written once and never changed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub id: i64,
    pub account_id: i64,
    pub record: PatientRecord,
    pub assessment: RiskAssessment,
    pub created_at: jiff::Timestamp,
}

impl Prediction {
    pub fn predicted_diseases(&self) -> String {
        self.assessment.predicted_diseases()
    }
}
