use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::patient::PatientRecord;

use crate::diseases::DiseaseInfo;
use crate::{Evaluation, RiskModel};

static INFO: DiseaseInfo = DiseaseInfo {
    description: "A cluster of conditions that increase risk of heart disease and diabetes",
    risk_factors: "Abdominal obesity, insulin resistance, high blood pressure",
    prevention: "Weight management, regular exercise, healthy eating habits",
};

/// Never adds a recommendation of its own.
pub struct MetabolicSyndrome;

impl RiskModel for MetabolicSyndrome {
    fn disease(&self) -> Disease {
        Disease::MetabolicSyndrome
    }

    fn info(&self) -> &DiseaseInfo {
        &INFO
    }

    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let mut eval = Evaluation::default();
        eval.check(record.bmi > 30.0, 25, None);
        eval.check(record.blood_sugar_fasting > 100.0, 20, None);
        eval.check(record.cholesterol_hdl < 50.0, 15, None);
        eval.check(record.blood_pressure_systolic > 130, 20, None);
        eval
    }
}
