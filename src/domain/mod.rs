// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all entity modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod country;
pub mod discover;
pub mod disease;
pub mod disease_type;
pub mod doctor;
pub mod input;
pub mod patient;
pub mod patient_disease;
pub mod public_servant;
pub mod record;
pub mod specialize;
pub mod user;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Reference entities
pub use country::{validate_country, Country};
pub use disease::{validate_disease, Disease};
pub use disease_type::{DiseaseType, DiseaseTypeId};
pub use doctor::{validate_doctor, Doctor};
pub use patient::{validate_patient, Patient};
pub use public_servant::{validate_public_servant, PublicServant};
pub use user::{validate_user, User};

// Relationship / fact entities (composite keys)
pub use discover::{validate_discover, Discover};
pub use patient_disease::{validate_patient_disease, PatientDisease};
pub use record::{validate_record, Record};
pub use specialize::{validate_specialize, Specialize};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

pub use validation::{ValidationError, ValidationResult};
