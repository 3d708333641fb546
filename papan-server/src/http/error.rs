//! Failures of the board pages and the create/add-item forms
//!
//! Each failure maps to one status (bad form input, unknown or private
//! board, oversized upload, store failure) and a small `{error, message}`
//! body. Store and template failures are logged and answered with a
//! generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Message returned for boards that exist but are not public.
pub const PRIVATE_BOARD_MESSAGE: &str = "This board cannot be accessed.";

/// Why a page or form request was refused
#[derive(Debug)]
pub enum ApiError {
    /// Form field failed validation (400)
    Validation(ValidationError),

    /// Request body could not be read (400)
    BadRequest { message: String },

    /// Upload exceeded the configured body limit (413)
    PayloadTooLarge { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Board exists but is not public (403)
    Forbidden,

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "bad_request",
                    "message": message
                }),
            ),
            Self::PayloadTooLarge { message } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({
                    "error": "payload_too_large",
                    "message": message
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({
                    "error": "forbidden",
                    "message": PRIVATE_BOARD_MESSAGE
                }),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    /// Map a body rejection by its own status: 413 stays 413, anything
    /// else is a malformed form.
    pub fn from_body_rejection(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge { message }
        } else {
            Self::BadRequest { message }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        Self::Internal {
            message: format!("template rendering failed: {:#}", e),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal {
            message: format!("IO error: {}", e),
        }
    }
}
