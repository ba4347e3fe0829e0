// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic beyond input validation
// - NO cross-repository calls
// - Referential integrity belongs to the store
// - Explicit SQL only

pub mod entity_repository;
pub mod sqlite_repository;
pub mod table;

pub mod country_repository;
pub mod discover_repository;
pub mod disease_repository;
pub mod disease_type_repository;
pub mod doctor_repository;
pub mod patient_disease_repository;
pub mod patient_repository;
pub mod public_servant_repository;
pub mod record_repository;
pub mod specialize_repository;
pub mod user_repository;

#[cfg(test)]
mod repository_tests;

pub use entity_repository::EntityRepository;
pub use sqlite_repository::SqliteRepository;
pub use table::Table;

pub use country_repository::SqliteCountryRepository;
pub use discover_repository::{DiscoverKey, SqliteDiscoverRepository};
pub use disease_repository::SqliteDiseaseRepository;
pub use disease_type_repository::SqliteDiseaseTypeRepository;
pub use doctor_repository::SqliteDoctorRepository;
pub use patient_disease_repository::{PatientDiseaseKey, SqlitePatientDiseaseRepository};
pub use patient_repository::SqlitePatientRepository;
pub use public_servant_repository::SqlitePublicServantRepository;
pub use record_repository::{RecordKey, SqliteRecordRepository};
pub use specialize_repository::{SpecializeKey, SqliteSpecializeRepository};
pub use user_repository::SqliteUserRepository;
