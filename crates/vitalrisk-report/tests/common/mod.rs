use vitalrisk_core::models::patient::{Gender, PatientRecord};
use vitalrisk_core::models::prediction::Prediction;
use vitalrisk_scoring::calculate_disease_risk;
use vitalrisk_scoring::fields::default_record;

pub fn prediction(id: i64, name: &str, age: u32, gender: Gender, at: &str) -> Prediction {
    let record = PatientRecord {
        patient_name: name.to_string(),
        age,
        gender,
        bmi: 20.0 + f64::from(age) / 10.0,
        ..default_record()
    };
    let assessment = calculate_disease_risk(&record);
    Prediction {
        id,
        account_id: 1,
        record,
        assessment,
        created_at: at.parse().unwrap(),
    }
}
