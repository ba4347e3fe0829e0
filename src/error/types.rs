// src/error/types.rs
use rusqlite::ErrorCode;
use serde::Serialize;
use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Store error: {0}")]
    Store(#[source] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

/// Flat classification of [`AppError`] for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    ConstraintViolation,
    Timeout,
    Store,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::Config(_) => ErrorKind::Validation,
            AppError::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            AppError::Timeout(_) => ErrorKind::Timeout,
            AppError::Store(_) | AppError::Pool(_) | AppError::Schema(_) => ErrorKind::Store,
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        self.kind() == ErrorKind::ConstraintViolation
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// SQLite result codes are folded into the taxonomy here, once, so that no
/// repository ever has to inspect them.
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        let code = match &err {
            rusqlite::Error::SqliteFailure(failure, _) => Some(failure.code),
            _ => None,
        };

        match code {
            Some(ErrorCode::ConstraintViolation) => AppError::ConstraintViolation(err.to_string()),
            Some(ErrorCode::DatabaseBusy)
            | Some(ErrorCode::DatabaseLocked)
            | Some(ErrorCode::OperationInterrupted) => AppError::Timeout(err.to_string()),
            _ => AppError::Store(err),
        }
    }
}

/// r2d2 only fails a checkout once its wait has expired.
impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Timeout(format!("connection checkout: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
