use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::patient::PatientRecord;

use crate::diseases::DiseaseInfo;
use crate::{Evaluation, RiskModel};

pub const REDUCE_ALCOHOL: &str = "Reduce alcohol consumption";

static INFO: DiseaseInfo = DiseaseInfo {
    description: "High blood pressure that can lead to serious health complications",
    risk_factors: "Age, obesity, excessive salt intake, lack of exercise, stress",
    prevention: "Low-sodium diet, regular exercise, maintain healthy weight, limit alcohol",
};

pub struct Hypertension;

impl RiskModel for Hypertension {
    fn disease(&self) -> Disease {
        Disease::Hypertension
    }

    fn info(&self) -> &DiseaseInfo {
        &INFO
    }

    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let mut eval = Evaluation::default();
        eval.check(
            record.blood_pressure_systolic > 120 || record.blood_pressure_diastolic > 80,
            30,
            None,
        );
        eval.check(record.age > 50, 20, None);
        eval.check(record.bmi > 25.0, 15, None);
        eval.check(record.alcohol_consumption.is_excessive(), 20, Some(REDUCE_ALCOHOL));
        eval.check(record.family_history_mentions("hypertension"), 25, None);
        eval
    }
}
