use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use super::validation::ValidationErrors;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiErrorKind {
    Validation,
    NotFound,
    Internal,
}

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input broke one or more schema rules; never reaches persistence
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Resource absent or hidden by its visibility restriction
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Persistence collaborator failed; the message is what the caller sees
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: DbErr,
    },
}

impl ApiError {
    pub fn not_found(resource: &'static str) -> Self {
        ApiError::NotFound { resource }
    }

    pub fn database(message: &'static str, source: DbErr) -> Self {
        ApiError::Database { message, source }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Validation(_) => ApiErrorKind::Validation,
            ApiError::NotFound { .. } => ApiErrorKind::NotFound,
            ApiError::Database { .. } => ApiErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ApiErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => json!({
                "error": "validation_failed",
                "detail": "Request validation failed",
                "errors": errors.violations(),
            }),
            ApiError::NotFound { resource } => json!({
                "error": "not_found",
                "detail": format!("{} not found", resource),
            }),
            ApiError::Database { message, source } => {
                // Store errors stay in the log; callers only get the fixed message
                error!(error = %source, "{}", message);
                json!({
                    "error": "internal_error",
                    "detail": message,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
