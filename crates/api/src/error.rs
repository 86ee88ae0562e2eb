//! API error types with HTTP response mapping.

use application::ApplicationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Application-layer error.
    Application(ApplicationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Application(err) => application_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn application_error_to_response(err: ApplicationError) -> (StatusCode, String) {
    match &err {
        ApplicationError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
        ApplicationError::Domain(_) | ApplicationError::Validation(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        ApplicationError::Store(StoreError::Duplicate(_)) => {
            (StatusCode::CONFLICT, err.to_string())
        }
        ApplicationError::Store(_) | ApplicationError::Publish(_) => {
            tracing::error!(error = %err, "infrastructure error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}
