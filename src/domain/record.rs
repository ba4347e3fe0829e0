// src/domain/record.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, require_non_negative, ValidationResult};

/// Case counts for one disease in one country, filed by a public servant.
///
/// Key is `(public_servant_email, country_name, disease_code)`. Only the two
/// counts change on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Foreign key -> PublicServant.email
    pub public_servant_email: String,

    /// Foreign key -> Country.name
    pub country_name: String,

    /// Foreign key -> Disease.code
    pub disease_code: String,

    pub total_deaths: i64,

    pub total_patients: i64,
}

impl Record {
    pub fn new(
        public_servant_email: impl Into<String>,
        country_name: impl Into<String>,
        disease_code: impl Into<String>,
        total_deaths: i64,
        total_patients: i64,
    ) -> Self {
        Self {
            public_servant_email: public_servant_email.into(),
            country_name: country_name.into(),
            disease_code: disease_code.into(),
            total_deaths,
            total_patients,
        }
    }
}

/// Validates all Record invariants
pub fn validate_record(record: &Record) -> ValidationResult<()> {
    require_non_empty("email", &record.public_servant_email)?;
    require_non_empty("cname", &record.country_name)?;
    require_non_empty("disease_code", &record.disease_code)?;
    require_non_negative("total_deaths", record.total_deaths)?;
    require_non_negative("total_patients", record.total_patients)?;
    Ok(())
}

/// Invariants that must hold true for Record:
///
/// 1. All three key components are present
/// 2. Counts are never negative
/// 3. Deaths MAY exceed patients (counts are filed independently)
