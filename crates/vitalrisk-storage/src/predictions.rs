use std::collections::BTreeMap;

use rusqlite::params;

use vitalrisk_core::models::disease::{Disease, RiskAssessment};
use vitalrisk_core::models::patient::PatientRecord;
use vitalrisk_core::models::prediction::Prediction;

use crate::database::{Database, parse_label, parse_timestamp};
use crate::error::StorageError;

/// Store one scored submission. Rows are never updated or deleted.
pub fn append(
    db: &Database,
    account_id: i64,
    record: &PatientRecord,
    assessment: &RiskAssessment,
) -> Result<Prediction, StorageError> {
    let conn = db.connect()?;
    let created_at = jiff::Timestamp::now();

    conn.execute(
        "INSERT INTO predictions (
            user_id, patient_name, age, gender, blood_pressure_systolic, blood_pressure_diastolic,
            cholesterol_total, cholesterol_hdl, cholesterol_ldl, blood_sugar_fasting,
            blood_sugar_random, hba1c, bmi, smoking_status, alcohol_consumption,
            exercise_frequency, family_history, predicted_diseases, risk_scores, recommendations,
            created_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17,
                   ?18, ?19, ?20, ?21)",
        params![
            account_id,
            record.patient_name,
            record.age,
            record.gender.as_str(),
            record.blood_pressure_systolic,
            record.blood_pressure_diastolic,
            record.cholesterol_total,
            record.cholesterol_hdl,
            record.cholesterol_ldl,
            record.blood_sugar_fasting,
            record.blood_sugar_random,
            record.hba1c,
            record.bmi,
            record.smoking_status.as_str(),
            record.alcohol_consumption.as_str(),
            record.exercise_frequency.as_str(),
            record.family_history,
            assessment.predicted_diseases(),
            serde_json::to_string(&assessment.risks)?,
            serde_json::to_string(&assessment.recommendations)?,
            created_at.to_string(),
        ],
    )?;

    let id = conn.last_insert_rowid();
    tracing::info!(
        prediction_id = id,
        account_id,
        summary = %assessment.predicted_diseases(),
        "prediction saved"
    );

    Ok(Prediction {
        id,
        account_id,
        record: record.clone(),
        assessment: assessment.clone(),
        created_at,
    })
}

struct PredictionRow {
    id: i64,
    account_id: i64,
    patient_name: String,
    age: u32,
    gender: String,
    systolic: u32,
    diastolic: u32,
    cholesterol_total: f64,
    cholesterol_hdl: f64,
    cholesterol_ldl: f64,
    blood_sugar_fasting: f64,
    blood_sugar_random: f64,
    hba1c: Option<f64>,
    bmi: f64,
    smoking_status: String,
    alcohol_consumption: String,
    exercise_frequency: String,
    family_history: Option<String>,
    risk_scores: String,
    recommendations: String,
    created_at: String,
}

impl PredictionRow {
    fn into_prediction(self) -> Result<Prediction, StorageError> {
        let risks: BTreeMap<Disease, u8> = serde_json::from_str(&self.risk_scores)?;
        let recommendations: Vec<String> = serde_json::from_str(&self.recommendations)?;

        Ok(Prediction {
            id: self.id,
            account_id: self.account_id,
            record: PatientRecord {
                patient_name: self.patient_name,
                age: self.age,
                gender: parse_label("gender", &self.gender)?,
                bmi: self.bmi,
                blood_pressure_systolic: self.systolic,
                blood_pressure_diastolic: self.diastolic,
                cholesterol_total: self.cholesterol_total,
                cholesterol_hdl: self.cholesterol_hdl,
                cholesterol_ldl: self.cholesterol_ldl,
                blood_sugar_fasting: self.blood_sugar_fasting,
                blood_sugar_random: self.blood_sugar_random,
                hba1c: self.hba1c,
                smoking_status: parse_label("smoking_status", &self.smoking_status)?,
                alcohol_consumption: parse_label("alcohol_consumption", &self.alcohol_consumption)?,
                exercise_frequency: parse_label("exercise_frequency", &self.exercise_frequency)?,
                family_history: self.family_history,
            },
            assessment: RiskAssessment {
                risks,
                recommendations,
            },
            created_at: parse_timestamp("created_at", &self.created_at)?,
        })
    }
}

/// Every prediction owned by `account_id`, newest first.
pub fn list_by_account(db: &Database, account_id: i64) -> Result<Vec<Prediction>, StorageError> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare(
        "SELECT id, user_id, patient_name, age, gender, blood_pressure_systolic,
         blood_pressure_diastolic, cholesterol_total, cholesterol_hdl, cholesterol_ldl,
         blood_sugar_fasting, blood_sugar_random, hba1c, bmi, smoking_status,
         alcohol_consumption, exercise_frequency, family_history, risk_scores,
         recommendations, created_at
         FROM predictions WHERE user_id = ?1 ORDER BY id DESC",
    )?;

    let rows = stmt
        .query_map(params![account_id], |row| {
            Ok(PredictionRow {
                id: row.get(0)?,
                account_id: row.get(1)?,
                patient_name: row.get(2)?,
                age: row.get(3)?,
                gender: row.get(4)?,
                systolic: row.get(5)?,
                diastolic: row.get(6)?,
                cholesterol_total: row.get(7)?,
                cholesterol_hdl: row.get(8)?,
                cholesterol_ldl: row.get(9)?,
                blood_sugar_fasting: row.get(10)?,
                blood_sugar_random: row.get(11)?,
                hba1c: row.get(12)?,
                bmi: row.get(13)?,
                smoking_status: row.get(14)?,
                alcohol_consumption: row.get(15)?,
                exercise_frequency: row.get(16)?,
                family_history: row.get(17)?,
                risk_scores: row.get(18)?,
                recommendations: row.get(19)?,
                created_at: row.get(20)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(PredictionRow::into_prediction).collect()
}
