use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::patient::PatientRecord;

use crate::diseases::DiseaseInfo;
use crate::{Evaluation, RiskModel};

pub const SEE_ENDOCRINOLOGIST: &str = "Immediate consultation with endocrinologist required";
pub const MONITOR_GLUCOSE: &str =
    "Monitor blood sugar levels and follow diabetic-friendly diet";
pub const INCREASE_ACTIVITY: &str =
    "Increase physical activity to at least 150 minutes per week";

static INFO: DiseaseInfo = DiseaseInfo {
    description: "A condition where blood sugar levels are consistently high",
    risk_factors: "Obesity, sedentary lifestyle, family history, age over 45",
    prevention: "Maintain healthy weight, regular physical activity, balanced diet",
};

pub struct Type2Diabetes;

impl RiskModel for Type2Diabetes {
    fn disease(&self) -> Disease {
        Disease::Type2Diabetes
    }

    fn info(&self) -> &DiseaseInfo {
        &INFO
    }

    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let mut eval = Evaluation::default();
        eval.check(record.age > 45, 15, None);
        eval.check(record.bmi > 25.0, 20, None);

        // Diabetic and pre-diabetic fasting glucose are exclusive bands.
        if record.blood_sugar_fasting > 126.0 {
            eval.check(true, 40, Some(SEE_ENDOCRINOLOGIST));
        } else {
            eval.check(record.blood_sugar_fasting > 100.0, 25, Some(MONITOR_GLUCOSE));
        }

        eval.check(record.hba1c_or_zero() > 6.5, 35, None);
        eval.check(record.family_history_mentions("diabetes"), 25, None);
        eval.check(record.exercise_frequency.is_sedentary(), 15, Some(INCREASE_ACTIVITY));
        eval
    }
}
