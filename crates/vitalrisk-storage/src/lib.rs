//! vitalrisk-storage
//!
//! SQLite persistence for accounts and stored predictions. Every operation
//! opens its own connection and closes it before returning.

pub mod accounts;
pub mod database;
pub mod error;
pub mod password;
pub mod predictions;

pub use database::Database;
