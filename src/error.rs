use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Request validation failed")]
    Validation {
        errors: Vec<FieldError>,
        body: String,
    },

    /// Body could not be read; keeps the status axum chose (413, 400, ...)
    #[error("Request body rejected: {message}")]
    BodyRejected { status: StatusCode, message: String },

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": msg }))).into_response()
            }
            AppError::Validation { errors, body } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": &errors,
                    "errors": errors,
                    "body": body,
                })),
            )
                .into_response(),
            AppError::BodyRejected { status, message } => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Failed to sign access token" })),
                )
                    .into_response()
            }
            AppError::JwtError(err) => {
                tracing::error!(error = %err, "Access token error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Failed to sign access token" })),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
