//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so every
//! endpoint fails the same way. Soft failures (success-flag bodies) are
//! produced by the handlers themselves; everything surfacing here becomes an
//! error status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use availo_core::errors::AvailoError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific [`AvailoError`] instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub AvailoError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            AvailoError::NotFound(_) => StatusCode::NOT_FOUND,
            AvailoError::Validation(_) => StatusCode::BAD_REQUEST,
            AvailoError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AvailoError::InvalidToken => StatusCode::UNAUTHORIZED,
            AvailoError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AvailoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, AvailoError>` inside
/// handlers that return `Result<T, AppError>`.
impl From<AvailoError> for AppError {
    fn from(err: AvailoError) -> Self {
        AppError(err)
    }
}

/// Repository errors surface as database faults.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AvailoError::Database(err))
    }
}
