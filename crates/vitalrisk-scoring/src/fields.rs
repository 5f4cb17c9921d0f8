use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use vitalrisk_core::models::patient::{
    AlcoholConsumption, ExerciseFrequency, Gender, PatientRecord, SmokingStatus,
};

use crate::error::ScoringError;

/// Whether the form collects a whole number or a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Integer,
    Decimal,
}

/// Defines the accepted range of a numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A numeric input on the prediction form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub group: String,
    pub kind: FieldKind,
    pub range: FieldRange,
    pub default: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldError {
    pub field_id: String,
    pub value: Option<f64>,
    pub expected_range: Option<FieldRange>,
    pub message: String,
}

/// Every numeric field of the prediction form, in display order.
pub fn fields() -> &'static [FieldSpec] {
    static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
        let int = |min: f64, max: f64| FieldRange {
            min,
            max,
            step: Some(1.0),
        };
        let dec = |min: f64, max: f64| FieldRange {
            min,
            max,
            step: None,
        };

        let specs = [
            ("age", "Age", "Patient Information", FieldKind::Integer, int(1.0, 120.0), 30.0),
            ("bmi", "BMI", "Patient Information", FieldKind::Decimal, dec(10.0, 50.0), 22.0),
            (
                "blood_pressure_systolic",
                "Systolic BP (mmHg)",
                "Blood Pressure",
                FieldKind::Integer,
                int(80.0, 250.0),
                120.0,
            ),
            (
                "blood_pressure_diastolic",
                "Diastolic BP (mmHg)",
                "Blood Pressure",
                FieldKind::Integer,
                int(50.0, 150.0),
                80.0,
            ),
            (
                "cholesterol_total",
                "Total Cholesterol",
                "Cholesterol Levels (mg/dL)",
                FieldKind::Integer,
                int(100.0, 400.0),
                200.0,
            ),
            (
                "cholesterol_hdl",
                "HDL (Good)",
                "Cholesterol Levels (mg/dL)",
                FieldKind::Integer,
                int(20.0, 100.0),
                50.0,
            ),
            (
                "cholesterol_ldl",
                "LDL (Bad)",
                "Cholesterol Levels (mg/dL)",
                FieldKind::Integer,
                int(50.0, 300.0),
                100.0,
            ),
            (
                "blood_sugar_fasting",
                "Fasting Glucose (mg/dL)",
                "Blood Sugar Levels",
                FieldKind::Integer,
                int(60.0, 400.0),
                90.0,
            ),
            (
                "blood_sugar_random",
                "Random Glucose (mg/dL)",
                "Blood Sugar Levels",
                FieldKind::Integer,
                int(70.0, 500.0),
                120.0,
            ),
            ("hba1c", "HbA1c (%)", "Blood Sugar Levels", FieldKind::Decimal, dec(4.0, 15.0), 5.5),
        ];

        specs
            .into_iter()
            .map(|(id, label, group, kind, range, default)| FieldSpec {
                id: id.to_string(),
                label: label.to_string(),
                group: group.to_string(),
                kind,
                range,
                default,
            })
            .collect()
    });
    &FIELDS
}

pub fn get_field(id: &str) -> Result<&'static FieldSpec, ScoringError> {
    fields()
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| ScoringError::UnknownField(id.to_string()))
}

fn default_of(id: &str) -> f64 {
    get_field(id).map(|f| f.default).unwrap_or_default()
}

/// A record pre-filled with the form defaults and no patient name.
pub fn default_record() -> PatientRecord {
    PatientRecord {
        patient_name: String::new(),
        age: default_of("age") as u32,
        gender: Gender::Male,
        bmi: default_of("bmi"),
        blood_pressure_systolic: default_of("blood_pressure_systolic") as u32,
        blood_pressure_diastolic: default_of("blood_pressure_diastolic") as u32,
        cholesterol_total: default_of("cholesterol_total"),
        cholesterol_hdl: default_of("cholesterol_hdl"),
        cholesterol_ldl: default_of("cholesterol_ldl"),
        blood_sugar_fasting: default_of("blood_sugar_fasting"),
        blood_sugar_random: default_of("blood_sugar_random"),
        hba1c: Some(default_of("hba1c")),
        smoking_status: SmokingStatus::Never,
        alcohol_consumption: AlcoholConsumption::Never,
        exercise_frequency: ExerciseFrequency::Daily,
        family_history: Some(String::new()),
    }
}

/// The record's numeric answers keyed by field id, in [`fields`] order.
pub fn numeric_values(record: &PatientRecord) -> Vec<(&'static str, Option<f64>)> {
    vec![
        ("age", Some(f64::from(record.age))),
        ("bmi", Some(record.bmi)),
        ("blood_pressure_systolic", Some(f64::from(record.blood_pressure_systolic))),
        ("blood_pressure_diastolic", Some(f64::from(record.blood_pressure_diastolic))),
        ("cholesterol_total", Some(record.cholesterol_total)),
        ("cholesterol_hdl", Some(record.cholesterol_hdl)),
        ("cholesterol_ldl", Some(record.cholesterol_ldl)),
        ("blood_sugar_fasting", Some(record.blood_sugar_fasting)),
        ("blood_sugar_random", Some(record.blood_sugar_random)),
        ("hba1c", record.hba1c),
    ]
}

/// Check a submitted record against the form rules. An empty result means
/// the record may be scored.
pub fn validate_record(record: &PatientRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if record.patient_name.trim().is_empty() {
        errors.push(FieldError {
            field_id: "patient_name".to_string(),
            value: None,
            expected_range: None,
            message: "Please enter patient name!".to_string(),
        });
    }

    for (id, value) in numeric_values(record) {
        let Some(value) = value else { continue };
        let Ok(spec) = get_field(id) else { continue };
        if !spec.range.contains(value) {
            errors.push(FieldError {
                field_id: id.to_string(),
                value: Some(value),
                expected_range: Some(spec.range),
                message: format!(
                    "{} {} is outside range [{}, {}]",
                    spec.label, value, spec.range.min, spec.range.max,
                ),
            });
        }
    }

    errors
}

/// [`validate_record`] as a `Result`, for callers that only need pass/fail.
pub fn ensure_valid(record: &PatientRecord) -> Result<(), ScoringError> {
    let errors = validate_record(record);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ScoringError::InvalidRecord(errors))
    }
}

/// The prediction form exactly as posted: every input arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub bmi: String,
    #[serde(default)]
    pub blood_pressure_systolic: String,
    #[serde(default)]
    pub blood_pressure_diastolic: String,
    #[serde(default)]
    pub cholesterol_total: String,
    #[serde(default)]
    pub cholesterol_hdl: String,
    #[serde(default)]
    pub cholesterol_ldl: String,
    #[serde(default)]
    pub blood_sugar_fasting: String,
    #[serde(default)]
    pub blood_sugar_random: String,
    #[serde(default)]
    pub hba1c: String,
    #[serde(default)]
    pub smoking_status: String,
    #[serde(default)]
    pub alcohol_consumption: String,
    #[serde(default)]
    pub exercise_frequency: String,
    #[serde(default)]
    pub family_history: String,
}

fn parse_number(id: &str, raw: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let label = get_field(id).map(|f| f.label.as_str()).unwrap_or(id);
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError {
            field_id: id.to_string(),
            value: None,
            expected_range: None,
            message: format!("{label} is required"),
        });
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError {
                field_id: id.to_string(),
                value: None,
                expected_range: None,
                message: format!("{label} must be a number"),
            });
            None
        }
    }
}

fn parse_choice<T: std::str::FromStr>(
    id: &str,
    label: &str,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError {
                field_id: id.to_string(),
                value: None,
                expected_range: None,
                message: format!("Please choose a valid {label}"),
            });
            None
        }
    }
}

fn whole_number_error(id: &str, value: f64, errors: &mut Vec<FieldError>) {
    let spec = get_field(id).ok();
    let label = spec.map(|f| f.label.as_str()).unwrap_or(id);
    errors.push(FieldError {
        field_id: id.to_string(),
        value: Some(value),
        expected_range: spec.map(|f| f.range),
        message: format!("{label} must be a whole number"),
    });
}

/// Narrow a parsed value to a whole number. Fractions, negatives and
/// overflow are reported and replaced by `fallback`.
fn to_whole(id: &str, value: Option<f64>, fallback: u32, errors: &mut Vec<FieldError>) -> u32 {
    let Some(v) = value else { return fallback };
    if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
        return v as u32;
    }
    whole_number_error(id, v, errors);
    fallback
}

/// Integer-kind lab values stay `f64` in the record but reject fractions.
/// Non-finite input is left for the range check.
fn to_integral(id: &str, value: Option<f64>, fallback: f64, errors: &mut Vec<FieldError>) -> f64 {
    let Some(v) = value else { return fallback };
    let integer_kind = matches!(get_field(id), Ok(spec) if spec.kind == FieldKind::Integer);
    if integer_kind && v.is_finite() && v.fract() != 0.0 {
        whole_number_error(id, v, errors);
        return fallback;
    }
    v
}

impl PatientForm {
    /// Convert the posted text into a record and run [`validate_record`].
    ///
    /// Unparseable inputs fall back to the form default in the returned
    /// record so the form can be re-rendered; they are always reported in
    /// the error list, which must be empty before the record is scored.
    pub fn into_record(self) -> (PatientRecord, Vec<FieldError>) {
        let mut errors = Vec::new();
        let defaults = default_record();

        let mut number = |id: &str, raw: &str| parse_number(id, raw, &mut errors);
        let age = number("age", &self.age);
        let bmi = number("bmi", &self.bmi);
        let systolic = number("blood_pressure_systolic", &self.blood_pressure_systolic);
        let diastolic = number("blood_pressure_diastolic", &self.blood_pressure_diastolic);
        let cholesterol_total = number("cholesterol_total", &self.cholesterol_total);
        let cholesterol_hdl = number("cholesterol_hdl", &self.cholesterol_hdl);
        let cholesterol_ldl = number("cholesterol_ldl", &self.cholesterol_ldl);
        let fasting = number("blood_sugar_fasting", &self.blood_sugar_fasting);
        let random = number("blood_sugar_random", &self.blood_sugar_random);

        // HbA1c is the one optional lab value.
        let hba1c = if self.hba1c.trim().is_empty() {
            None
        } else {
            parse_number("hba1c", &self.hba1c, &mut errors).or(defaults.hba1c)
        };

        let gender = parse_choice("gender", "gender", &self.gender, &mut errors);
        let smoking = parse_choice("smoking_status", "smoking status", &self.smoking_status, &mut errors);
        let alcohol = parse_choice(
            "alcohol_consumption",
            "alcohol consumption",
            &self.alcohol_consumption,
            &mut errors,
        );
        let exercise = parse_choice(
            "exercise_frequency",
            "exercise frequency",
            &self.exercise_frequency,
            &mut errors,
        );

        let age = to_whole("age", age, defaults.age, &mut errors);
        let systolic = to_whole(
            "blood_pressure_systolic",
            systolic,
            defaults.blood_pressure_systolic,
            &mut errors,
        );
        let diastolic = to_whole(
            "blood_pressure_diastolic",
            diastolic,
            defaults.blood_pressure_diastolic,
            &mut errors,
        );

        let mut lab = |id: &str, value: Option<f64>, fallback: f64| {
            to_integral(id, value, fallback, &mut errors)
        };
        let cholesterol_total = lab("cholesterol_total", cholesterol_total, defaults.cholesterol_total);
        let cholesterol_hdl = lab("cholesterol_hdl", cholesterol_hdl, defaults.cholesterol_hdl);
        let cholesterol_ldl = lab("cholesterol_ldl", cholesterol_ldl, defaults.cholesterol_ldl);
        let fasting = lab("blood_sugar_fasting", fasting, defaults.blood_sugar_fasting);
        let random = lab("blood_sugar_random", random, defaults.blood_sugar_random);

        let record = PatientRecord {
            patient_name: self.patient_name.trim().to_string(),
            age,
            gender: gender.unwrap_or(defaults.gender),
            bmi: bmi.unwrap_or(defaults.bmi),
            blood_pressure_systolic: systolic,
            blood_pressure_diastolic: diastolic,
            cholesterol_total,
            cholesterol_hdl,
            cholesterol_ldl,
            blood_sugar_fasting: fasting,
            blood_sugar_random: random,
            hba1c,
            smoking_status: smoking.unwrap_or(defaults.smoking_status),
            alcohol_consumption: alcohol.unwrap_or(defaults.alcohol_consumption),
            exercise_frequency: exercise.unwrap_or(defaults.exercise_frequency),
            family_history: Some(self.family_history),
        };

        errors.extend(validate_record(&record));
        (record, errors)
    }
}
