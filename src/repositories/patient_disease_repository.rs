// src/repositories/patient_disease_repository.rs

use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::domain::{validate_patient_disease, PatientDisease, ValidationResult};
use crate::repositories::sqlite_repository::SqliteRepository;
use crate::repositories::table::Table;

pub type SqlitePatientDiseaseRepository = SqliteRepository<PatientDisease>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientDiseaseKey {
    pub patient_email: String,
    pub disease_code: String,
}

impl PatientDiseaseKey {
    pub fn new(patient_email: impl Into<String>, disease_code: impl Into<String>) -> Self {
        Self {
            patient_email: patient_email.into(),
            disease_code: disease_code.into(),
        }
    }
}

impl Table for PatientDisease {
    type Key = PatientDiseaseKey;

    const TABLE: &'static str = "PatientDisease";
    const NAME: &'static str = "patient_disease";
    const KEY_COLUMNS: &'static [&'static str] = &["email", "disease_code"];
    const VALUE_COLUMNS: &'static [&'static str] = &[];

    fn key(&self) -> PatientDiseaseKey {
        PatientDiseaseKey::new(self.patient_email.clone(), self.disease_code.clone())
    }

    fn bind_key(key: &PatientDiseaseKey) -> Vec<&dyn ToSql> {
        vec![&key.patient_email as &dyn ToSql, &key.disease_code]
    }

    fn bind_values(&self) -> Vec<&dyn ToSql> {
        Vec::new()
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PatientDisease {
            patient_email: row.get(0)?,
            disease_code: row.get(1)?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_patient_disease(self)
    }
}
