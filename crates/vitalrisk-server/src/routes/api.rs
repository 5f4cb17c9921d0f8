use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use vitalrisk_core::models::disease::Disease;
use vitalrisk_core::models::prediction::Prediction;
use vitalrisk_scoring::{DiseaseInfo, all_models};
use vitalrisk_storage::predictions;

use crate::error::ApiJsonError;
use crate::session::Session;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DiseaseEntry {
    pub disease: Disease,
    pub name: String,
    #[serde(flatten)]
    pub info: DiseaseInfo,
}

/// The caller's predictions, newest first.
pub async fn list_predictions(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<Prediction>>, ApiJsonError> {
    let account_id = session.user.id;
    let history = state
        .with_db(move |db| predictions::list_by_account(db, account_id))
        .await?;
    Ok(Json(history))
}

pub async fn list_diseases() -> Json<Vec<DiseaseEntry>> {
    Json(
        all_models()
            .iter()
            .map(|m| DiseaseEntry {
                disease: m.disease(),
                name: m.disease().to_string(),
                info: *m.info(),
            })
            .collect(),
    )
}
