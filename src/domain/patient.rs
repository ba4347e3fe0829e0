// src/domain/patient.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationResult};

/// A patient carries nothing but its identity.
///
/// With no mutable fields, the only way to "edit" a patient is to rekey it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub email: String,
}

impl Patient {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

pub fn validate_patient(patient: &Patient) -> ValidationResult<()> {
    require_non_empty("email", &patient.email)
}
