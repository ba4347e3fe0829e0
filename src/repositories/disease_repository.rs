// src/repositories/disease_repository.rs

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{validate_disease, Disease, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteDiseaseRepository = SqliteRepository<Disease>;

impl Table for Disease {
    type Key = String;

    const TABLE: &'static str = "Disease";
    const NAME: &'static str = "disease";
    const KEY_COLUMNS: &'static [&'static str] = &["disease_code"];
    const VALUE_COLUMNS: &'static [&'static str] = &["pathogen", "description", "id"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_key(key: &String) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.pathogen as &dyn ToSql, &self.description, &self.disease_type_id]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Disease {
            code: row.get(0)?,
            pathogen: row.get(1)?,
            description: row.get(2)?,
            disease_type_id: row.get(3)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_disease(self)
    }
}
