// src/domain/public_servant.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationResult};

/// Government employee who files case records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicServant {
    pub email: String,
    pub department: String,
}

impl PublicServant {
    pub fn new(email: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            department: department.into(),
        }
    }
}

pub fn validate_public_servant(servant: &PublicServant) -> ValidationResult<()> {
    require_non_empty("email", &servant.email)
}
