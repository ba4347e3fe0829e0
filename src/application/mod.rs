// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between the request orchestrator and the repositories
// - Owns the wired repository set
// - Translates typed errors and `None` into boundary responses

pub mod error_handling;
pub mod state;

pub use error_handling::{found, ErrorResponse, ErrorType, ToErrorResponse};
pub use state::Repositories;
