// src/domain/input.rs
//
// Raw form field -> typed value conversion
//
// The orchestrator hands over strings exactly as submitted. These helpers
// turn them into the typed values the repositories accept and raise
// ValidationError BEFORE any store call is attempted.
//
// RULES:
// - Empty optional fields become None, never 0 or ""
// - Dates are ISO calendar dates (YYYY-MM-DD)
// - Integers are base-10 i64, surrounding whitespace ignored

use chrono::NaiveDate;

use super::validation::{require_non_negative, ValidationError, ValidationResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Required text field, trimmed.
pub fn required_text(field: &'static str, raw: &str) -> ValidationResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Optional text field. Blank input means absent.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_integer(field: &'static str, raw: &str) -> ValidationResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

/// Integer that must also be >= 0 (population, deaths, patients).
pub fn parse_count(field: &'static str, raw: &str) -> ValidationResult<i64> {
    let value = parse_integer(field, raw)?;
    require_non_negative(field, value)?;
    Ok(value)
}

/// Optional integer (salary). Blank input means absent.
pub fn parse_optional_integer(field: &'static str, raw: &str) -> ValidationResult<Option<i64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_integer(field, raw).map(Some)
}

pub fn parse_date(field: &'static str, raw: &str) -> ValidationResult<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}
