use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Implements `as_str`, `Display`, `FromStr` and `ALL` for a labelled enum.
///
/// The label is the exact text shown in the form and stored in the
/// database; parsing is case-insensitive.
macro_rules! labelled_enum {
    ($ty:ident, $kind:literal, [$($variant:ident => $label:literal),+ $(,)?]) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::CoreError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use labelled_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

labelled_enum!(Gender, "gender", [
    Male => "Male",
    Female => "Female",
    Other => "Other",
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SmokingStatus {
    #[serde(rename = "Never smoked")]
    Never,
    #[serde(rename = "Former smoker")]
    Former,
    #[serde(rename = "Current smoker")]
    Current,
    #[serde(rename = "Heavy smoker")]
    Heavy,
}

labelled_enum!(SmokingStatus, "smoking status", [
    Never => "Never smoked",
    Former => "Former smoker",
    Current => "Current smoker",
    Heavy => "Heavy smoker",
]);

impl SmokingStatus {
    /// Current and heavy smokers are the active-smoking risk group.
    pub fn is_active(&self) -> bool {
        matches!(self, SmokingStatus::Current | SmokingStatus::Heavy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AlcoholConsumption {
    Never,
    Occasionally,
    Weekly,
    Daily,
    #[serde(rename = "Heavy drinker")]
    Heavy,
}

labelled_enum!(AlcoholConsumption, "alcohol consumption", [
    Never => "Never",
    Occasionally => "Occasionally",
    Weekly => "Weekly",
    Daily => "Daily",
    Heavy => "Heavy drinker",
]);

impl AlcoholConsumption {
    pub fn is_excessive(&self) -> bool {
        matches!(self, AlcoholConsumption::Heavy | AlcoholConsumption::Daily)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExerciseFrequency {
    Daily,
    #[serde(rename = "4-6 times/week")]
    FourToSixWeekly,
    #[serde(rename = "2-3 times/week")]
    TwoToThreeWeekly,
    #[serde(rename = "Once a week")]
    Weekly,
    Rarely,
    Never,
}

labelled_enum!(ExerciseFrequency, "exercise frequency", [
    Daily => "Daily",
    FourToSixWeekly => "4-6 times/week",
    TwoToThreeWeekly => "2-3 times/week",
    Weekly => "Once a week",
    Rarely => "Rarely",
    Never => "Never",
]);

impl ExerciseFrequency {
    pub fn is_sedentary(&self) -> bool {
        matches!(self, ExerciseFrequency::Never | ExerciseFrequency::Rarely)
    }
}

/// One patient's vitals, labs and lifestyle answers as submitted on the
/// prediction form.
///
/// LDL and random glucose are collected and stored but no risk model reads
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub patient_name: String,
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
    pub blood_pressure_systolic: u32,
    pub blood_pressure_diastolic: u32,
    pub cholesterol_total: f64,
    pub cholesterol_hdl: f64,
    pub cholesterol_ldl: f64,
    pub blood_sugar_fasting: f64,
    pub blood_sugar_random: f64,
    #[serde(default)]
    pub hba1c: Option<f64>,
    pub smoking_status: SmokingStatus,
    pub alcohol_consumption: AlcoholConsumption,
    pub exercise_frequency: ExerciseFrequency,
    #[serde(default)]
    pub family_history: Option<String>,
}

impl PatientRecord {
    /// HbA1c with the absent case read as 0.
    pub fn hba1c_or_zero(&self) -> f64 {
        self.hba1c.unwrap_or(0.0)
    }

    /// Case-insensitive substring test against the free-text family history.
    /// An absent history never matches.
    pub fn family_history_mentions(&self, condition: &str) -> bool {
        self.family_history
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&condition.to_lowercase())
    }
}
