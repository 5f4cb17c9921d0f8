//! vitalrisk-core
//!
//! Pure domain types shared by every vitalrisk crate: accounts, patient
//! records, stored predictions, and the registration form rules.
//! No database or HTTP dependency.

pub mod error;
pub mod models;
pub mod validation;
