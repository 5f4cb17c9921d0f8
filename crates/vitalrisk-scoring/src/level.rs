use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Presentation tier of a risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const HIGH_THRESHOLD: u8 = 70;
    pub const MODERATE_THRESHOLD: u8 = 40;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= Self::MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Moderate => "MODERATE RISK",
            RiskLevel::Low => "LOW RISK",
        }
    }

    /// Bar color on the result chart.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "red",
            RiskLevel::Moderate => "orange",
            RiskLevel::Low => "green",
        }
    }
}
