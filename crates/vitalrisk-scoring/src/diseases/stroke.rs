use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::patient::PatientRecord;

use crate::diseases::DiseaseInfo;
use crate::{Evaluation, RiskModel};

static INFO: DiseaseInfo = DiseaseInfo {
    description: "Interrupted blood flow to the brain causing cell damage",
    risk_factors: "High blood pressure, smoking, diabetes, heart disease, age",
    prevention: "Control blood pressure, quit smoking, manage diabetes, stay active",
};

pub struct Stroke;

impl RiskModel for Stroke {
    fn disease(&self) -> Disease {
        Disease::Stroke
    }

    fn info(&self) -> &DiseaseInfo {
        &INFO
    }

    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let mut eval = Evaluation::default();
        eval.check(record.age > 55, 20, None);
        eval.check(record.blood_pressure_systolic > 140, 25, None);
        eval.check(record.smoking_status.is_active(), 25, None);
        eval.check(record.family_history_mentions("stroke"), 30, None);
        eval
    }
}
