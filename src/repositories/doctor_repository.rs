// src/repositories/doctor_repository.rs

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{validate_doctor, Doctor, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqliteDoctorRepository = SqliteRepository<Doctor>;

impl Table for Doctor {
    type Key = String;

    const TABLE: &'static str = "Doctor";
    const NAME: &'static str = "doctor";
    const KEY_COLUMNS: &'static [&'static str] = &["email"];
    const VALUE_COLUMNS: &'static [&'static str] = &["degree"];

    fn key(&self) -> String {
        self.email.clone()
    }

    fn bind_key(key: &String) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.degree as &dyn ToSql]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Doctor {
            email: row.get(0)?,
            degree: row.get(1)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_doctor(self)
    }
}
