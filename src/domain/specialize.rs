// src/domain/specialize.rs

use serde::{Deserialize, Serialize};

use super::disease_type::DiseaseTypeId;
use super::validation::{require_non_empty, ValidationResult};

/// A doctor's specialization in a disease type.
///
/// Pure link row: both fields form the key, nothing else is stored.
/// Moving a specialization to another doctor or type is a rekey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialize {
    pub disease_type_id: DiseaseTypeId,
    pub doctor_email: String,
}

impl Specialize {
    pub fn new(disease_type_id: DiseaseTypeId, doctor_email: impl Into<String>) -> Self {
        Self {
            disease_type_id,
            doctor_email: doctor_email.into(),
        }
    }
}

pub fn validate_specialize(specialize: &Specialize) -> ValidationResult<()> {
    require_non_empty("email", &specialize.doctor_email)
}
