use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use vitalrisk_core::models::account::AuthenticatedUser;
use vitalrisk_core::validation::RegistrationForm;
use vitalrisk_report::views::Notice;
use vitalrisk_storage::accounts::{self, DEMO_PASSWORD, DEMO_USERNAME};
use vitalrisk_storage::error::StorageError;

use crate::error::ApiError;
use crate::session;
use crate::state::AppState;

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password!";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password!";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const PLEASE_LOGIN: &str = "Please login with your new account!";

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if state.sessions.from_headers(&headers).await.is_some() {
        return Ok(Redirect::to("/predict").into_response());
    }
    Ok(Html(state.views.login(&[])?).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let username = form.username.trim().to_string();
    if username.is_empty() || form.password.is_empty() {
        return Ok(Html(state.views.login(&[Notice::error(MISSING_CREDENTIALS)])?).into_response());
    }

    let password = form.password;
    let outcome = state
        .try_with_db(move |db| accounts::authenticate(db, &username, &password))
        .await?;
    match outcome {
        Ok(user) => start_session(&state, &headers, user).await,
        Err(StorageError::InvalidCredentials) => {
            Ok(Html(state.views.login(&[Notice::error(INVALID_CREDENTIALS)])?).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn demo_login(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let user = state
        .with_db(|db| {
            accounts::ensure_demo_account(db)?;
            accounts::authenticate(db, DEMO_USERNAME, DEMO_PASSWORD)
        })
        .await?;
    start_session(&state, &headers, user).await
}

/// Replace whatever session the browser already carries with a new one.
async fn start_session(
    state: &AppState,
    headers: &HeaderMap,
    user: AuthenticatedUser,
) -> Result<Response, ApiError> {
    if let Some(previous) = session::session_token(headers) {
        state.sessions.remove(previous).await;
    }
    let session = state.sessions.create(user).await;
    Ok((
        [(SET_COOKIE, session::set_cookie(session.token))],
        Redirect::to("/predict"),
    )
        .into_response())
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session::session_token(&headers)
        && let Some(ended) = state.sessions.remove(token).await
    {
        tracing::info!(user_id = ended.user.id, "logout");
    }
    (
        [(SET_COOKIE, session::clear_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}

pub async fn register_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.register(&[])?))
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<Html<String>, ApiError> {
    let new_account = match form.validate() {
        Ok(account) => account,
        Err(issue) => return Ok(Html(state.views.register(&[Notice::error(issue.message())])?)),
    };

    let outcome = state
        .try_with_db(move |db| accounts::register(db, &new_account))
        .await?;
    match outcome {
        Ok(_) => {
            let notices = [Notice::success(ACCOUNT_CREATED), Notice::info(PLEASE_LOGIN)];
            Ok(Html(state.views.login(&notices)?))
        }
        Err(StorageError::UsernameTaken { .. }) => Ok(Html(
            state
                .views
                .register(&[Notice::error("Username already exists!")])?,
        )),
        Err(StorageError::EmailTaken { .. }) => Ok(Html(
            state
                .views
                .register(&[Notice::error("Email already registered!")])?,
        )),
        Err(e) => Err(e.into()),
    }
}
