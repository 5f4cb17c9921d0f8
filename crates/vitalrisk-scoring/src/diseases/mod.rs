pub mod cardiovascular;
pub mod diabetes;
pub mod hypertension;
pub mod metabolic;
pub mod stroke;

use serde::Serialize;

/// Plain-language notes about a disease, shown on the information page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiseaseInfo {
    pub description: &'static str,
    pub risk_factors: &'static str,
    pub prevention: &'static str,
}
