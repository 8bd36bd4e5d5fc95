use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster::RosterError;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Failures surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            RosterError::ConstraintViolation(_) => ApiError::Conflict(err.to_string()),
            RosterError::Database(ref db_err) => {
                error!("Database failure: {}", db_err);
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            success: false,
        };

        (status, Json(body)).into_response()
    }
}
