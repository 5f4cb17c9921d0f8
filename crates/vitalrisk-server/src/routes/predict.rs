use axum::extract::State;
use axum::response::Html;
use axum::{Extension, Form};

use vitalrisk_report::views::Notice;
use vitalrisk_scoring::calculate_disease_risk;
use vitalrisk_scoring::fields::{PatientForm, default_record};
use vitalrisk_storage::predictions;

use crate::error::ApiError;
use crate::session::Session;
use crate::state::AppState;

pub const PREDICTION_SAVED: &str = "Prediction saved to your history!";

pub async fn predict_page(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, ApiError> {
    let html = state
        .views
        .predict(&session.user, &default_record(), &[], &[])?;
    Ok(Html(html))
}

/// Validate the submitted form, score it, and store the prediction.
/// A rejected form comes back pre-filled with its errors and is never scored.
pub async fn submit_prediction(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<PatientForm>,
) -> Result<Html<String>, ApiError> {
    let (record, errors) = form.into_record();
    if let Some(first) = errors.first() {
        tracing::debug!(field = %first.field_id, count = errors.len(), "prediction form rejected");
        let html = state.views.predict(&session.user, &record, &errors, &[])?;
        return Ok(Html(html));
    }

    let assessment = calculate_disease_risk(&record);
    let account_id = session.user.id;
    let saved = state
        .with_db(move |db| predictions::append(db, account_id, &record, &assessment))
        .await?;

    let html = state.views.result(
        &session.user,
        &saved.record,
        &saved.assessment,
        &[Notice::success(PREDICTION_SAVED)],
    )?;
    Ok(Html(html))
}
