// src/repositories/patient_repository.rs
//
// Patient persistence
//
// A patient is only an email. `update` writes nothing and reports whether
// the row exists; changing the email is a `rekey`, which fails with a
// constraint violation while PatientDisease rows still point at it.

use rusqlite::types::ToSql;
use rusqlite::Row;

use crate::domain::{validate_patient, Patient, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqlitePatientRepository = SqliteRepository<Patient>;

impl Table for Patient {
    type Key = String;

    const TABLE: &'static str = "Patients";
    const NAME: &'static str = "patient";
    const KEY_COLUMNS: &'static [&'static str] = &["email"];
    const VALUE_COLUMNS: &'static [&'static str] = &[];

    fn key(&self) -> String {
        self.email.clone()
    }

    fn bind_key(key: &String) -> Vec<&dyn ToSql> {
        vec![key as &dyn ToSql]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        Vec::new()
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Patient { email: row.get(0)? })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_patient(self)
    }
}
