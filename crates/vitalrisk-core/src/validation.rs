use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::models::account::NewAccount;
use crate::models::patient::Gender;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid")
});

/// The registration form exactly as submitted, before any checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Why a registration form was refused before reaching the account store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationIssue {
    MissingFields,
    PasswordMismatch,
    PasswordTooShort,
    InvalidEmail,
    InvalidDateOfBirth,
    InvalidGender,
}

impl RegistrationIssue {
    pub fn message(&self) -> &'static str {
        match self {
            RegistrationIssue::MissingFields => "Please fill in all required fields!",
            RegistrationIssue::PasswordMismatch => "Passwords do not match!",
            RegistrationIssue::PasswordTooShort => {
                "Password must be at least 6 characters long!"
            }
            RegistrationIssue::InvalidEmail => "Please enter a valid email address!",
            RegistrationIssue::InvalidDateOfBirth => "Please enter a valid date of birth!",
            RegistrationIssue::InvalidGender => "Please choose a valid gender!",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

impl RegistrationForm {
    /// Run the form checks in the order the user sees them and convert the
    /// form into a [`NewAccount`]. Only the first failing check is reported.
    pub fn validate(&self) -> Result<NewAccount, RegistrationIssue> {
        let required = [&self.username, &self.email, &self.password, &self.full_name];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(RegistrationIssue::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(RegistrationIssue::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationIssue::PasswordTooShort);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(RegistrationIssue::InvalidEmail);
        }

        let date_of_birth = match self.date_of_birth.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<jiff::civil::Date>()
                    .map_err(|_| RegistrationIssue::InvalidDateOfBirth)?,
            ),
        };
        let gender = match self.gender.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<Gender>()
                    .map_err(|_| RegistrationIssue::InvalidGender)?,
            ),
        };

        Ok(NewAccount {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_string(),
            date_of_birth,
            gender,
        })
    }
}
