use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Gender;

/// A registered user. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password_hash: String,
    pub full_name: String,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub gender: Option<Gender>,
    pub created_at: jiff::Timestamp,
    pub last_login: Option<jiff::Timestamp>,
}

/// Input to account registration, after form validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub gender: Option<Gender>,
}

/// The identity handed back by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
}
