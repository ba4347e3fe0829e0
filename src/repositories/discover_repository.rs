// src/repositories/discover_repository.rs
//
// Discover persistence
//
// Dates travel as ISO `YYYY-MM-DD` text through rusqlite's chrono support.

use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::domain::{validate_discover, Discover, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteDiscoverRepository = SqliteRepository<Discover>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscoverKey {
    pub country_name: String,
    pub disease_code: String,
}

impl DiscoverKey {
    pub fn new(country_name: impl Into<String>, disease_code: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
            disease_code: disease_code.into(),
        }
    }
}

impl Table for Discover {
    type Key = DiscoverKey;

    const TABLE: &'static str = "Discover";
    const NAME: &'static str = "discover";
    const KEY_COLUMNS: &'static [&'static str] = &["cname", "disease_code"];
    const VALUE_COLUMNS: &'static [&'static str] = &["first_enc_date"];

    fn key(&self) -> DiscoverKey {
        DiscoverKey::new(self.country_name.clone(), self.disease_code.clone())
    }

    fn bind_key(key: &DiscoverKey) -> Vec<&dyn ToSql> {
        vec![&key.country_name as &dyn ToSql, &key.disease_code]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.first_encounter as &dyn ToSql]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Discover {
            country_name: row.get(0)?,
            disease_code: row.get(1)?,
            first_encounter: row.get(2)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_discover(self)
    }
}
