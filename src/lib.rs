// src/lib.rs
// pubhealth - Data-access layer for a public-health administration console
//
// Architecture:
// - Domain: plain entities plus the field checks they must pass
// - Repositories: one generic SQLite repository, described per table
// - Store: explicit pool handle with a deadline on every call
// - Application: wired repository set and boundary error responses
// - The request orchestrator (routing, forms, templates) lives elsewhere

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repositories;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_country,
    validate_discover,
    validate_disease,
    validate_doctor,
    validate_patient,
    validate_patient_disease,
    validate_public_servant,
    validate_record,
    validate_specialize,
    validate_user,
    Country,
    Discover,
    Disease,
    DiseaseType,
    DiseaseTypeId,
    Doctor,
    Patient,
    PatientDisease,
    PublicServant,
    Record,
    Specialize,
    User,
    ValidationError,
    ValidationResult,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, ErrorKind};

// ============================================================================
// PUBLIC API - Configuration & Database
// ============================================================================

pub use config::{AppConfig, DatabaseConfig, DatabaseLocation};

pub use db::{
    create_connection_pool, get_database_stats, initialize_database, verify_database_integrity,
    ConnectionPool, DatabaseStats, Store,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    DiscoverKey,
    EntityRepository,
    PatientDiseaseKey,
    RecordKey,
    SpecializeKey,
    SqliteCountryRepository,
    SqliteDiscoverRepository,
    SqliteDiseaseRepository,
    SqliteDiseaseTypeRepository,
    SqliteDoctorRepository,
    SqlitePatientDiseaseRepository,
    SqlitePatientRepository,
    SqlitePublicServantRepository,
    SqliteRecordRepository,
    SqliteRepository,
    SqliteSpecializeRepository,
    SqliteUserRepository,
    Table,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{found, ErrorResponse, ErrorType, Repositories, ToErrorResponse};
