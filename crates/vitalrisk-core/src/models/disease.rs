use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::patient::labelled_enum;

/// The five assessed diseases. Declaration order is evaluation order, so a
/// `BTreeMap<Disease, _>` iterates the way results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Disease {
    #[serde(rename = "Cardiovascular Disease")]
    Cardiovascular,
    #[serde(rename = "Type 2 Diabetes")]
    Type2Diabetes,
    Hypertension,
    #[serde(rename = "Metabolic Syndrome")]
    MetabolicSyndrome,
    Stroke,
}

labelled_enum!(Disease, "disease", [
    Cardiovascular => "Cardiovascular Disease",
    Type2Diabetes => "Type 2 Diabetes",
    Hypertension => "Hypertension",
    MetabolicSyndrome => "Metabolic Syndrome",
    Stroke => "Stroke",
]);

/// Output of the scoring function: one percentage per disease plus the
/// ordered recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub risks: BTreeMap<Disease, u8>,
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    pub fn score(&self, disease: Disease) -> Option<u8> {
        self.risks.get(&disease).copied()
    }

    /// `"Cardiovascular Disease: 55%, Type 2 Diabetes: 0%, ..."`
    pub fn predicted_diseases(&self) -> String {
        self.risks
            .iter()
            .map(|(disease, score)| format!("{disease}: {score}%"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
