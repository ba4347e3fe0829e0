// src/domain/disease.rs

use serde::{Deserialize, Serialize};

use super::disease_type::DiseaseTypeId;
use super::validation::{require_non_empty, ValidationResult};

/// A disease, identified by its code (e.g. "D01").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    /// Natural key, immutable after creation
    pub code: String,

    /// Causative agent
    pub pathogen: String,

    pub description: String,

    /// Foreign key -> DiseaseType.id
    pub disease_type_id: DiseaseTypeId,
}

impl Disease {
    pub fn new(
        code: impl Into<String>,
        pathogen: impl Into<String>,
        description: impl Into<String>,
        disease_type_id: DiseaseTypeId,
    ) -> Self {
        Self {
            code: code.into(),
            pathogen: pathogen.into(),
            description: description.into(),
            disease_type_id,
        }
    }
}

/// Validates all Disease invariants
pub fn validate_disease(disease: &Disease) -> ValidationResult<()> {
    require_non_empty("disease_code", &disease.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_disease() {
        let disease = Disease::new("D01", "SARS-CoV-2", "COVID-19", 1);
        assert!(validate_disease(&disease).is_ok());
    }

    #[test]
    fn test_blank_code_fails() {
        let disease = Disease::new("", "SARS-CoV-2", "COVID-19", 1);
        assert!(validate_disease(&disease).is_err());
    }
}
