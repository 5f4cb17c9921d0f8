use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

use crate::error::ApiError;
use crate::state::AppState;

/// Public, but shows the navigation when the visitor is logged in.
pub async fn info_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    let session = state.sessions.from_headers(&headers).await;
    Ok(Html(state.views.info(session.as_ref().map(|s| &s.user))?))
}
