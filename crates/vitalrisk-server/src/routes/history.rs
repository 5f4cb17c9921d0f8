use axum::Extension;
use axum::extract::State;
use axum::response::Html;

use vitalrisk_storage::predictions;

use crate::error::ApiError;
use crate::session::Session;
use crate::state::AppState;

pub async fn history_page(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, ApiError> {
    let account_id = session.user.id;
    let history = state
        .with_db(move |db| predictions::list_by_account(db, account_id))
        .await?;
    Ok(Html(state.views.history(&session.user, &history)?))
}
