use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::patient::{Gender, PatientRecord};

use crate::diseases::DiseaseInfo;
use crate::{Evaluation, RiskModel};

pub const MONITOR_BLOOD_PRESSURE: &str =
    "Monitor blood pressure regularly and consider medication if advised by doctor";
pub const LOW_CHOLESTEROL_DIET: &str =
    "Follow a low-cholesterol diet and consider statin therapy";
pub const WEIGHT_MANAGEMENT: &str = "Weight management through diet and exercise";
pub const QUIT_SMOKING: &str = "Quit smoking immediately - seek professional help if needed";

static INFO: DiseaseInfo = DiseaseInfo {
    description: "Heart and blood vessel diseases including heart attacks and strokes",
    risk_factors: "High blood pressure, high cholesterol, smoking, obesity, family history",
    prevention: "Regular exercise, healthy diet, quit smoking, manage stress",
};

/// Heart and vessel disease. The only model that weighs sex.
pub struct Cardiovascular;

impl RiskModel for Cardiovascular {
    fn disease(&self) -> Disease {
        Disease::Cardiovascular
    }

    fn info(&self) -> &DiseaseInfo {
        &INFO
    }

    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let mut eval = Evaluation::default();
        eval.check(record.age > 45, 20, None);
        eval.check(record.gender == Gender::Male, 10, None);
        eval.check(
            record.blood_pressure_systolic > 140 || record.blood_pressure_diastolic > 90,
            25,
            Some(MONITOR_BLOOD_PRESSURE),
        );
        eval.check(record.cholesterol_total > 240.0, 20, Some(LOW_CHOLESTEROL_DIET));
        eval.check(record.cholesterol_hdl < 40.0, 15, None);
        eval.check(record.bmi > 30.0, 15, Some(WEIGHT_MANAGEMENT));
        eval.check(record.smoking_status.is_active(), 30, Some(QUIT_SMOKING));
        eval.check(record.family_history_mentions("heart disease"), 20, None);
        eval
    }
}
