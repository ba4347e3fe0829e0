// src/repositories/disease_type_repository.rs
//
// DiseaseType persistence
//
// `id` is an INTEGER PRIMARY KEY: `create` ignores the caller's id and
// returns the one SQLite assigned. `rekey` is the only path that writes an
// explicit id.

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{DiseaseType, DiseaseTypeId};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteDiseaseTypeRepository = SqliteRepository<DiseaseType>;

impl Table for DiseaseType {
    type Key = DiseaseTypeId;

    const TABLE: &'static str = "DiseaseType";
    const NAME: &'static str = "disease_type";
    const KEY_COLUMNS: &'static [&'static str] = &["id"];
    const VALUE_COLUMNS: &'static [&'static str] = &["description"];
    const GENERATED_KEY: bool = true;

    fn key(&self) -> DiseaseTypeId {
        self.id
    }

    fn bind_key(key: &DiseaseTypeId) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.description as &dyn ToSql]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(DiseaseType {
            id: row.get(0)?,
            description: row.get(1)?,
        })
    }

    fn assigned_key(&self, rowid: i64) -> DiseaseTypeId {
        rowid
    }
}
