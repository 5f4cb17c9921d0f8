//! vitalrisk-report
//!
//! Everything the user sees: history statistics, chart series for the
//! result and analytics pages, and the Tera-rendered HTML views.

pub mod charts;
pub mod error;
pub mod stats;
pub mod views;
