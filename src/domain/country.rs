// src/domain/country.rs

use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, require_non_negative, ValidationResult};

/// A country, identified by its unique name.
///
/// Referenced by discoveries, case records and users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Natural key, immutable after creation
    pub name: String,

    /// Head count, never negative
    pub population: i64,
}

impl Country {
    pub fn new(name: impl Into<String>, population: i64) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }
}

/// Validates all Country invariants
pub fn validate_country(country: &Country) -> ValidationResult<()> {
    require_non_empty("cname", &country.name)?;
    require_non_negative("population", country.population)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_country() {
        assert!(validate_country(&Country::new("Italy", 59_000_000)).is_ok());
    }

    #[test]
    fn test_empty_population_is_allowed() {
        assert!(validate_country(&Country::new("Vatican", 0)).is_ok());
    }

    #[test]
    fn test_negative_population_fails() {
        assert!(validate_country(&Country::new("Italy", -1)).is_err());
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(validate_country(&Country::new(" ", 10)).is_err());
    }
}
