// src/repositories/record_repository.rs
//
// Record persistence
//
// Three-part key; every component is matched on lookup so records for the
// same servant and country but different diseases never collide.

use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::domain::{validate_record, Record, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteRecordRepository = SqliteRepository<Record>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub public_servant_email: String,
    pub country_name: String,
    pub disease_code: String,
}

impl RecordKey {
    pub fn new(
        public_servant_email: impl Into<String>,
        country_name: impl Into<String>,
        disease_code: impl Into<String>,
    ) -> Self {
        Self {
            public_servant_email: public_servant_email.into(),
            country_name: country_name.into(),
            disease_code: disease_code.into(),
        }
    }
}

impl Table for Record {
    type Key = RecordKey;

    const TABLE: &'static str = "Record";
    const NAME: &'static str = "record";
    const KEY_COLUMNS: &'static [&'static str] = &["email", "cname", "disease_code"];
    const VALUE_COLUMNS: &'static [&'static str] = &["total_deaths", "total_patients"];

    fn key(&self) -> RecordKey {
        RecordKey::new(
            self.public_servant_email.clone(),
            self.country_name.clone(),
            self.disease_code.clone(),
        )
    }

    fn bind_key(key: &RecordKey) -> Vec<&dyn ToSql> {
        vec![
            &key.public_servant_email as &dyn ToSql,
            &key.country_name,
            &key.disease_code,
        ]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.total_deaths as &dyn ToSql, &self.total_patients]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Record {
            public_servant_email: row.get(0)?,
            country_name: row.get(1)?,
            disease_code: row.get(2)?,
            total_deaths: row.get(3)?,
            total_patients: row.get(4)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_record(self)
    }
}
