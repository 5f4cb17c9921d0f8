use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use vitalrisk_report::error::ReportError;
use vitalrisk_storage::error::StorageError;

/// Unified error type for route handlers.
///
/// Page routes surface internal failures as a generic HTML 500; the JSON
/// API routes wrap errors in [`ApiJsonError`].
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let page = format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p><p><a href=\"/login\">Back</a></p></body></html>",
            status.as_u16(),
            escape_html(&message)
        );
        (status, Html(page)).into_response()
    }
}

/// The JSON rendition of [`ApiError`], for `/api/*` routes.
#[derive(Debug)]
pub struct ApiJsonError(pub ApiError);

impl IntoResponse for ApiJsonError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ApiError> for ApiJsonError {
    fn from(e: ApiError) -> Self {
        ApiJsonError(e)
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("blocking task failed: {e}"))
    }
}
