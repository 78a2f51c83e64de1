//! Error-to-response mapping
//!
//! Domain errors cross the HTTP boundary as a JSON body with a stable
//! shape. Mapping: validation errors are 400, unknown resources 404,
//! provider failures 502, everything else 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cda_domain::error::Error;
use serde::Serialize;
use tracing::error;

/// JSON error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error description
    pub error: String,
}

/// Wrapper turning domain errors into HTTP responses
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Error::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("not found: {resource}"))
            }
            Error::Generation { message, .. } => (
                StatusCode::BAD_GATEWAY,
                format!("generation failed: {message}"),
            ),
            other => {
                error!(error = %other, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result alias for handler functions
pub type ApiResult<T> = std::result::Result<T, ApiError>;
