// src/application/error_handling.rs
//
// Error handling at the orchestrator boundary
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides one error format for whatever renders the result
// - Store internals are logged, not shown
// - "Not found" is produced here from `None`, never by a repository

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Duplicate key, dangling reference or CHECK failure (409)
    ConstraintViolation,

    /// Deadline exceeded (503)
    Timeout,

    /// Database/persistence error (500)
    Database,

    /// Startup and configuration failures (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(validation) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: validation.to_string(),
                details: Some(validation.field().to_string()),
            },

            AppError::ConstraintViolation(message) => Self {
                success: false,
                error_type: ErrorType::ConstraintViolation,
                message: "The change conflicts with existing data".to_string(),
                details: Some(message),
            },

            AppError::Timeout(message) => {
                warn!("event=error_response module=application kind=timeout error={}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Timeout,
                    message: "The database did not respond in time".to_string(),
                    details: Some(message),
                }
            }

            AppError::Store(db_error) => {
                error!("event=error_response module=application kind=store error={:?}", db_error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Pool(message) | AppError::Schema(message) => {
                error!("event=error_response module=application kind=database error={}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database unavailable".to_string(),
                    details: None,
                }
            }

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Internal,
                message,
                details: None,
            },
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

/// Turn a lookup result into the entity or a not-found response.
pub fn found<T>(result: Result<Option<T>, AppError>, resource: &str) -> Result<T, ErrorResponse> {
    match result {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(ErrorResponse::not_found(resource)),
        Err(e) => Err(ErrorResponse::from_app_error(e)),
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
