// src/domain/validation.rs
//
// Shared field checks used by every entity validator.

use thiserror::Error;

/// Input that must be rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("{field} is not a valid integer: `{value}`")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} is not a valid date (expected YYYY-MM-DD): `{value}`")]
    InvalidDate { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::Negative { field, .. }
            | Self::InvalidInteger { field, .. }
            | Self::InvalidDate { field, .. } => *field,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Text keys and required references cannot be blank.
pub fn require_non_empty(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Population and case counts are never negative.
pub fn require_non_negative(field: &'static str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}
