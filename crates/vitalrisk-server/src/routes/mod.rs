pub mod analytics;
pub mod api;
pub mod auth;
pub mod health;
pub mod history;
pub mod info;
pub mod predict;
