// src/error/mod.rs
//
// Crate-wide error taxonomy
//
// NotFound is deliberately absent: lookups return Option and "no such row"
// is never an error.

pub mod types;

pub use types::{AppError, AppResult, ErrorKind};
