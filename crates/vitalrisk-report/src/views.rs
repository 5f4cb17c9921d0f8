use serde::Serialize;
use tera::{Context, Tera};

use vitalrisk_core::models::account::AuthenticatedUser;
use vitalrisk_core::models::disease::RiskAssessment;
use vitalrisk_core::models::patient::{
    AlcoholConsumption, ExerciseFrequency, Gender, PatientRecord, SmokingStatus,
};
use vitalrisk_core::models::prediction::Prediction;
use vitalrisk_scoring::all_models;
use vitalrisk_scoring::fields::{FieldError, FieldKind, fields, numeric_values};
use vitalrisk_scoring::level::RiskLevel;

use crate::charts::{AnalyticsCharts, risk_bar_chart};
use crate::error::ReportError;
use crate::stats::{HistoryStats, utc_date};

const TEMPLATES: [(&str, &str); 8] = [
    ("base.html", include_str!("../templates/base.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("register.html", include_str!("../templates/register.html")),
    ("predict.html", include_str!("../templates/predict.html")),
    ("result.html", include_str!("../templates/result.html")),
    ("history.html", include_str!("../templates/history.html")),
    ("analytics.html", include_str!("../templates/analytics.html")),
    ("info.html", include_str!("../templates/info.html")),
];

pub const EMPTY_HISTORY: &str = "No predictions found. Make your first prediction!";
pub const EMPTY_ANALYTICS: &str = "No data available for analytics. Make some predictions first!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

/// A one-line banner shown at the top of a page.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }
}

#[derive(Serialize)]
struct Page<'a, T: Serialize> {
    title: &'a str,
    user: Option<&'a AuthenticatedUser>,
    notices: &'a [Notice],
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct NumberInput {
    id: &'static str,
    label: String,
    min: f64,
    max: f64,
    step: &'static str,
    value: String,
}

#[derive(Serialize)]
struct InputGroup {
    name: String,
    inputs: Vec<NumberInput>,
}

#[derive(Serialize)]
struct Select {
    id: &'static str,
    label: &'static str,
    options: Vec<&'static str>,
    selected: &'static str,
}

#[derive(Serialize)]
struct PredictBody<'a> {
    patient_name: &'a str,
    family_history: &'a str,
    groups: Vec<InputGroup>,
    selects: Vec<Select>,
    errors: &'a [FieldError],
}

#[derive(Serialize)]
struct RiskRow {
    disease: String,
    score: u8,
    level: RiskLevel,
    label: &'static str,
}

#[derive(Serialize)]
struct ResultBody<'a> {
    patient_name: &'a str,
    risks: Vec<RiskRow>,
    recommendations: &'a [String],
    chart_json: String,
}

#[derive(Serialize)]
struct HistoryEntry<'a> {
    patient_name: &'a str,
    date: jiff::civil::Date,
    age: u32,
    gender: &'static str,
    bmi: f64,
    blood_pressure: String,
    predicted_diseases: String,
    recommendations: &'a [String],
}

#[derive(Serialize)]
struct HistoryBody<'a> {
    stats: Option<HistoryStats>,
    entries: Vec<HistoryEntry<'a>>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct AnalyticsBody {
    has_data: bool,
    charts_json: String,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct DiseaseSection {
    name: String,
    description: &'static str,
    risk_factors: &'static str,
    prevention: &'static str,
}

#[derive(Serialize)]
struct InfoBody {
    diseases: Vec<DiseaseSection>,
}

/// JSON for a `<script type="application/json">` block.
fn script_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn format_value(kind: FieldKind, value: Option<f64>) -> String {
    match (kind, value) {
        (_, None) => String::new(),
        (FieldKind::Integer, Some(v)) => format!("{v:.0}"),
        (FieldKind::Decimal, Some(v)) => format!("{v:.1}"),
    }
}

fn labels<T: Copy>(all: &[T], label: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(label).collect()
}

/// All pages, parsed once at startup.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, ReportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| ReportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    fn render<T: Serialize>(
        &self,
        template: &str,
        title: &str,
        user: Option<&AuthenticatedUser>,
        notices: &[Notice],
        body: T,
    ) -> Result<String, ReportError> {
        let page = Page {
            title,
            user,
            notices,
            body,
        };
        let context = Context::from_serialize(&page)
            .map_err(|e| ReportError::TemplateRender(e.to_string()))?;
        let html = self.tera.render(template, &context)?;
        tracing::debug!(template, bytes = html.len(), "page rendered");
        Ok(html)
    }

    pub fn login(&self, notices: &[Notice]) -> Result<String, ReportError> {
        self.render("login.html", "Login", None, notices, Empty {})
    }

    pub fn register(&self, notices: &[Notice]) -> Result<String, ReportError> {
        #[derive(Serialize)]
        struct RegisterBody {
            genders: Vec<&'static str>,
        }
        let body = RegisterBody {
            genders: labels(Gender::ALL, Gender::as_str),
        };
        self.render("register.html", "Register", None, notices, body)
    }

    /// The prediction form, pre-filled from `record` and annotated with
    /// any validation `errors` from a rejected submission.
    pub fn predict(
        &self,
        user: &AuthenticatedUser,
        record: &PatientRecord,
        errors: &[FieldError],
        notices: &[Notice],
    ) -> Result<String, ReportError> {
        let values = numeric_values(record);
        let mut groups: Vec<InputGroup> = Vec::new();
        for spec in fields() {
            let (id, value) = values
                .iter()
                .find(|(id, _)| *id == spec.id)
                .copied()
                .unwrap_or(("", None));
            let input = NumberInput {
                id,
                label: spec.label.clone(),
                min: spec.range.min,
                max: spec.range.max,
                step: match spec.kind {
                    FieldKind::Integer => "1",
                    FieldKind::Decimal => "0.1",
                },
                value: format_value(spec.kind, value),
            };
            match groups.last_mut() {
                Some(group) if group.name == spec.group => group.inputs.push(input),
                _ => groups.push(InputGroup {
                    name: spec.group.clone(),
                    inputs: vec![input],
                }),
            }
        }

        let selects = vec![
            Select {
                id: "gender",
                label: "Gender",
                options: labels(Gender::ALL, Gender::as_str),
                selected: record.gender.as_str(),
            },
            Select {
                id: "smoking_status",
                label: "Smoking Status",
                options: labels(SmokingStatus::ALL, SmokingStatus::as_str),
                selected: record.smoking_status.as_str(),
            },
            Select {
                id: "alcohol_consumption",
                label: "Alcohol Consumption",
                options: labels(AlcoholConsumption::ALL, AlcoholConsumption::as_str),
                selected: record.alcohol_consumption.as_str(),
            },
            Select {
                id: "exercise_frequency",
                label: "Exercise Frequency",
                options: labels(ExerciseFrequency::ALL, ExerciseFrequency::as_str),
                selected: record.exercise_frequency.as_str(),
            },
        ];

        let body = PredictBody {
            patient_name: &record.patient_name,
            family_history: record.family_history.as_deref().unwrap_or(""),
            groups,
            selects,
            errors,
        };
        self.render("predict.html", "Disease Prediction", Some(user), notices, body)
    }

    pub fn result(
        &self,
        user: &AuthenticatedUser,
        record: &PatientRecord,
        assessment: &RiskAssessment,
        notices: &[Notice],
    ) -> Result<String, ReportError> {
        let risks = assessment
            .risks
            .iter()
            .map(|(disease, &score)| {
                let level = RiskLevel::from_score(score);
                RiskRow {
                    disease: disease.to_string(),
                    score,
                    level,
                    label: level.label(),
                }
            })
            .collect();
        let body = ResultBody {
            patient_name: &record.patient_name,
            risks,
            recommendations: &assessment.recommendations,
            chart_json: script_json(&risk_bar_chart(assessment))?,
        };
        self.render("result.html", "Disease Susceptibility Results", Some(user), notices, body)
    }

    /// `predictions` must be newest-first, as the store returns them.
    pub fn history(
        &self,
        user: &AuthenticatedUser,
        predictions: &[Prediction],
    ) -> Result<String, ReportError> {
        let entries = predictions
            .iter()
            .map(|p| HistoryEntry {
                patient_name: &p.record.patient_name,
                date: utc_date(p.created_at),
                age: p.record.age,
                gender: p.record.gender.as_str(),
                bmi: p.record.bmi,
                blood_pressure: format!(
                    "{}/{}",
                    p.record.blood_pressure_systolic, p.record.blood_pressure_diastolic
                ),
                predicted_diseases: p.predicted_diseases(),
                recommendations: &p.assessment.recommendations,
            })
            .collect();
        let body = HistoryBody {
            stats: HistoryStats::from_predictions(predictions),
            entries,
            empty_message: EMPTY_HISTORY,
        };
        self.render("history.html", "My Prediction History", Some(user), &[], body)
    }

    pub fn analytics(
        &self,
        user: &AuthenticatedUser,
        predictions: &[Prediction],
    ) -> Result<String, ReportError> {
        let body = AnalyticsBody {
            has_data: !predictions.is_empty(),
            charts_json: script_json(&AnalyticsCharts::from_predictions(predictions))?,
            empty_message: EMPTY_ANALYTICS,
        };
        self.render("analytics.html", "Health Analytics Dashboard", Some(user), &[], body)
    }

    pub fn info(&self, user: Option<&AuthenticatedUser>) -> Result<String, ReportError> {
        let diseases = all_models()
            .iter()
            .map(|m| {
                let info = m.info();
                DiseaseSection {
                    name: m.disease().to_string(),
                    description: info.description,
                    risk_factors: info.risk_factors,
                    prevention: info.prevention,
                }
            })
            .collect();
        self.render("info.html", "About Disease Risks", user, &[], InfoBody { diseases })
    }
}
