// src/domain/discover.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationResult};

/// First recorded encounter of a disease in a country.
///
/// Identified by `(country_name, disease_code)`; only the date is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discover {
    /// Foreign key -> Country.name
    pub country_name: String,

    /// Foreign key -> Disease.code
    pub disease_code: String,

    pub first_encounter: NaiveDate,
}

impl Discover {
    pub fn new(
        country_name: impl Into<String>,
        disease_code: impl Into<String>,
        first_encounter: NaiveDate,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            disease_code: disease_code.into(),
            first_encounter,
        }
    }
}

pub fn validate_discover(discover: &Discover) -> ValidationResult<()> {
    require_non_empty("cname", &discover.country_name)?;
    require_non_empty("disease_code", &discover.disease_code)?;
    Ok(())
}
