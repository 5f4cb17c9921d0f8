//! vitalrisk-scoring
//!
//! Disease risk models and the form field rules that gate them. Pure
//! functions over a [`PatientRecord`]; no storage or HTTP dependency.
//!
//! Every model is a flat list of threshold checks. Each matched check adds
//! a fixed number of points and may trigger one recommendation line; the
//! total is clamped to 100.

pub mod diseases;
pub mod error;
pub mod fields;
pub mod level;

use std::collections::BTreeMap;

use vitalrisk_core::models::disease::{Disease, RiskAssessment};
use vitalrisk_core::models::patient::PatientRecord;

pub use diseases::DiseaseInfo;

pub const MAX_SCORE: u8 = 100;

/// Shown when no model triggered any recommendation.
pub const HEALTHY_LIFESTYLE: &str = "Maintain current healthy lifestyle";

/// Appended to every recommendation list, in this order.
pub const CLOSING_RECOMMENDATIONS: [&str; 2] = [
    "Regular health check-ups every 6-12 months",
    "Follow a balanced diet rich in fruits and vegetables",
];

/// Points and recommendations collected by one model for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub points: u32,
    pub recommendations: Vec<&'static str>,
}

impl Evaluation {
    /// Add `points` when `matched`; the recommendation, if any, rides along.
    pub fn check(&mut self, matched: bool, points: u32, recommendation: Option<&'static str>) {
        if matched {
            self.points += points;
            if let Some(text) = recommendation {
                self.recommendations.push(text);
            }
        }
    }

    /// The point total clamped to [`MAX_SCORE`].
    pub fn score(&self) -> u8 {
        self.points.min(u32::from(MAX_SCORE)) as u8
    }
}

/// Trait implemented by each disease risk model.
pub trait RiskModel: Send + Sync {
    fn disease(&self) -> Disease;

    /// Patient-facing description used by the information page.
    fn info(&self) -> &DiseaseInfo;

    /// Run every threshold check of this model against `record`.
    fn evaluate(&self, record: &PatientRecord) -> Evaluation;
}

/// All models in evaluation order.
pub fn all_models() -> Vec<Box<dyn RiskModel>> {
    vec![
        Box::new(diseases::cardiovascular::Cardiovascular),
        Box::new(diseases::diabetes::Type2Diabetes),
        Box::new(diseases::hypertension::Hypertension),
        Box::new(diseases::metabolic::MetabolicSyndrome),
        Box::new(diseases::stroke::Stroke),
    ]
}

pub fn get_model(disease: Disease) -> Option<Box<dyn RiskModel>> {
    all_models().into_iter().find(|m| m.disease() == disease)
}

/// Score `record` against every disease model.
///
/// The caller is expected to have validated the record with
/// [`fields::validate_record`]; this function itself never fails.
pub fn calculate_disease_risk(record: &PatientRecord) -> RiskAssessment {
    let mut risks = BTreeMap::new();
    let mut recommendations: Vec<String> = Vec::new();

    for model in all_models() {
        let evaluation = model.evaluate(record);
        risks.insert(model.disease(), evaluation.score());
        recommendations.extend(evaluation.recommendations.iter().map(|r| r.to_string()));
    }

    if recommendations.is_empty() {
        recommendations.push(HEALTHY_LIFESTYLE.to_string());
    }
    recommendations.extend(CLOSING_RECOMMENDATIONS.iter().map(|r| r.to_string()));

    RiskAssessment {
        risks,
        recommendations,
    }
}
