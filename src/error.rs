//! Error types for Parc server

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes returned in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 3,
    NoSuchEquipment = 5,
    Duplicate = 8,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A single field was rejected (format, catalog mismatch, immutable field)
    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    /// A field that must be unique collides with another record
    #[error("Duplicate {field}: {message}")]
    DuplicateField { field: &'static str, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        AppError::InvalidField {
            field,
            message: message.into(),
        }
    }

    pub fn duplicate_field(field: &'static str, message: impl Into<String>) -> Self {
        AppError::DuplicateField {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field, for field-level errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppError::InvalidField { field, .. } | AppError::DuplicateField { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Field the error refers to, when the error is field-level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let field = self.field().map(str::to_string);

        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchEquipment, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::InvalidField { message, .. } => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, message.clone())
            }
            AppError::DuplicateField { message, .. } => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, message.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            field,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_level_errors_expose_field() {
        let err = AppError::duplicate_field("numero_serie", "already used");
        assert_eq!(err.field(), Some("numero_serie"));
        assert_eq!(err.to_string(), "Duplicate numero_serie: already used");

        assert_eq!(AppError::NotFound("x".into()).field(), None);
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::duplicate_field("numero_serie", "dup").into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = AppError::invalid_field("numero_serie", "bad").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::NotFound("gone".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
