// src/application/error_handling.rs
//
// Error Handling for the UI boundary
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Keeps field names and identities so the UI can point at the input
// - Logs fatal errors

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Bad field value; fix the input and retry
    Validation,

    /// Entry or season already exists
    Duplicate,

    /// Lookup target missing
    NotFound,

    /// Search field not available for that media kind
    UnsupportedField,

    /// Catalog file cannot be read or written
    Storage,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::InvalidField { field, reason }) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: format!("Invalid {}", field),
                details: Some(reason),
            },

            AppError::Domain(domain_error @ DomainError::DuplicateSeason(_)) => Self {
                success: false,
                error_type: ErrorType::Duplicate,
                message: domain_error.to_string(),
                details: None,
            },

            AppError::DuplicateEntity { kind, identity } => Self {
                success: false,
                error_type: ErrorType::Duplicate,
                message: format!("This {} is already in the catalog", kind),
                details: Some(identity.to_string()),
            },

            AppError::NotFound(what) => Self::not_found(&what),

            AppError::UnsupportedField { kind, field } => Self {
                success: false,
                error_type: ErrorType::UnsupportedField,
                message: format!("Cannot search {} by {}", kind, field),
                details: None,
            },

            fatal @ (AppError::CorruptState { .. }
            | AppError::Persistence { .. }
            | AppError::Serialization(_)) => {
                error!("Storage error: {}", fatal);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Could not access the catalog file".to_string(),
                    details: Some(fatal.to_string()),
                }
            }
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

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}
