// src/domain/user.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, ValidationResult};

/// Console user living in a country.
///
/// `salary` and `phone` are optional: `None` is stored as NULL and read back
/// as `None`, so "absent" never collapses into 0 or "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Natural key, immutable after creation
    pub email: String,

    pub name: String,

    pub surname: String,

    /// Absent when unknown
    pub salary: Option<i64>,

    /// Absent when unknown
    pub phone: Option<String>,

    /// Foreign key -> Country.name
    pub country_name: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        country_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            surname: surname.into(),
            salary: None,
            phone: None,
            country_name: country_name.into(),
        }
    }

    pub fn with_salary(mut self, salary: Option<i64>) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }
}

/// Validates all User invariants
pub fn validate_user(user: &User) -> ValidationResult<()> {
    require_non_empty("email", &user.email)?;
    require_non_empty("cname", &user.country_name)?;
    Ok(())
}
