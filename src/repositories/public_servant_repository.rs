// src/repositories/public_servant_repository.rs

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{validate_public_servant, PublicServant, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqlitePublicServantRepository = SqliteRepository<PublicServant>;

impl Table for PublicServant {
    type Key = String;

    const TABLE: &'static str = "PublicServant";
    const NAME: &'static str = "public_servant";
    const KEY_COLUMNS: &'static [&'static str] = &["email"];
    const VALUE_COLUMNS: &'static [&'static str] = &["department"];

    fn key(&self) -> String {
        self.email.clone()
    }

    fn bind_key(key: &String) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.department as &dyn ToSql]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PublicServant {
            email: row.get(0)?,
            department: row.get(1)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_public_servant(self)
    }
}
