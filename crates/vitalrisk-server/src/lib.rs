//! vitalrisk-server
//!
//! Form-driven HTTP surface: login, registration, prediction, history,
//! analytics and information pages, plus a small JSON API.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::response::Redirect;
use axum::routing::{get, post};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route(
            "/predict",
            get(routes::predict::predict_page).post(routes::predict::submit_prediction),
        )
        .route("/history", get(routes::history::history_page))
        .route("/analytics", get(routes::analytics::analytics_page))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::session::require_session,
        ));

    let api = Router::new()
        .route("/api/predictions", get(routes::api::list_predictions))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::session::require_api_session,
        ));

    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        // Public
        .route("/health", get(routes::health::health_check))
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login),
        )
        .route("/demo-login", post(routes::auth::demo_login))
        .route(
            "/register",
            get(routes::auth::register_page).post(routes::auth::register),
        )
        .route("/logout", post(routes::auth::logout))
        .route("/info", get(routes::info::info_page))
        .route("/api/diseases", get(routes::api::list_diseases))
        // Session required
        .merge(pages)
        .merge(api)
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .with_state(state)
}
