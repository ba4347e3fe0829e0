// src/repositories/specialize_repository.rs
//
// Specialize persistence
//
// Link row without mutable columns. Moving a specialization to another
// doctor or disease type goes through `rekey`.

use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::domain::{validate_specialize, DiseaseTypeId, Specialize, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteSpecializeRepository = SqliteRepository<Specialize>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecializeKey {
    pub disease_type_id: DiseaseTypeId,
    pub doctor_email: String,
}

impl SpecializeKey {
    pub fn new(disease_type_id: DiseaseTypeId, doctor_email: impl Into<String>) -> Self {
        Self {
            disease_type_id,
            doctor_email: doctor_email.into(),
        }
    }
}

impl Table for Specialize {
    type Key = SpecializeKey;

    const TABLE: &'static str = "Specialize";
    const NAME: &'static str = "specialize";
    const KEY_COLUMNS: &'static [&'static str] = &["id", "email"];
    const VALUE_COLUMNS: &'static [&'static str] = &[];

    fn key(&self) -> SpecializeKey {
        SpecializeKey::new(self.disease_type_id, self.doctor_email.clone())
    }

    fn bind_key(key: &SpecializeKey) -> Vec<&dyn ToSql> {
        vec![&key.disease_type_id as &dyn ToSql, &key.doctor_email]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        Vec::new()
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Specialize {
            disease_type_id: row.get(0)?,
            doctor_email: row.get(1)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_specialize(self)
    }
}
