// src/repositories/country_repository.rs
//
// Country persistence

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{validate_country, Country, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteCountryRepository = SqliteRepository<Country>;

impl Table for Country {
    type Key = String;

    const TABLE: &'static str = "Country";
    const NAME: &'static str = "country";
    const KEY_COLUMNS: &'static [&'static str] = &["cname"];
    const VALUE_COLUMNS: &'static [&'static str] = &["population"];

    fn key(&self) -> String {
        self.name.clone()
    }

    fn bind_key(key: &String) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.population as &dyn ToSql]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Country {
            name: row.get(0)?,
            population: row.get(1)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_country(self)
    }
}
