// src/domain/doctor.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub email: String,
    pub degree: String,
}

impl Doctor {
    pub fn new(email: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            degree: degree.into(),
        }
    }
}

pub fn validate_doctor(doctor: &Doctor) -> ValidationResult<()> {
    require_non_empty("email", &doctor.email)
}
