// src/domain/patient_disease.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationResult};

/// A patient diagnosed with a disease. Pure link row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDisease {
    pub patient_email: String,
    pub disease_code: String,
}

impl PatientDisease {
    pub fn new(patient_email: impl Into<String>, disease_code: impl Into<String>) -> Self {
        Self {
            patient_email: patient_email.into(),
            disease_code: disease_code.into(),
        }
    }
}

pub fn validate_patient_disease(link: &PatientDisease) -> ValidationResult<()> {
    require_non_empty("email", &link.patient_email)?;
    require_non_empty("disease_code", &link.disease_code)?;
    Ok(())
}
