use thiserror::Error;

use crate::fields::FieldError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("record failed validation: {}", summarize(.0))]
    InvalidRecord(Vec<FieldError>),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
