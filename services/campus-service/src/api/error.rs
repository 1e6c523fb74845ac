//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint returns the
//! same `{message, timestamp, status}` body, and owns the translation from
//! service failures to status codes.
//!
//! # Key invariants and assumptions
//! - `body.status` always equals the response status code.
//! - `InvalidInput` maps to 400, `ResourceNotFound` to 404 and store failures
//!   to 500.
//!
//! # Security considerations
//! - Store failures log details server-side but return a generic message.
use crate::api::types::ErrorResponse;
use crate::service::ServiceError;
use crate::store::StoreError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

/// Structured API error returned by handlers.
///
/// # Example
/// ```rust
/// use axum::http::StatusCode;
/// use campus_service::api::error::api_not_found;
///
/// let err = api_not_found("no campus found for name \"UCF\"");
/// assert_eq!(err.status, StatusCode::NOT_FOUND);
/// assert_eq!(err.body.status, 404);
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                message: message.into(),
                timestamp: Utc::now().timestamp_millis(),
                status: status.as_u16(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => api_invalid_input(&message),
            ServiceError::ResourceNotFound(message) => api_not_found(&message),
            ServiceError::Store(err) => api_internal("storage operation failed", &err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        api_invalid_input(&rejection.body_text())
    }
}

/// Build a 400 Bad Request error.
pub fn api_invalid_input(message: &str) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, message)
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, message)
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error and returns `message` to the client.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "campus-service storage error");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let invalid: ApiError = ServiceError::InvalidInput("id must be positive".into()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body.status, 400);
        assert_eq!(invalid.body.message, "id must be positive");

        let missing: ApiError = ServiceError::ResourceNotFound("no building".into()).into();
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.body.status, 404);

        let store: ApiError =
            ServiceError::Store(StoreError::Unexpected(anyhow::anyhow!("disk on fire"))).into();
        assert_eq!(store.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.body.status, 500);
        assert!(!store.body.message.contains("disk on fire"));
    }

    #[test]
    fn api_internal_logs_and_wraps_store_error() {
        let err = StoreError::Unexpected(anyhow::anyhow!("boom"));
        let api = api_internal("storage failed", &err);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.message, "storage failed");
    }

    #[test]
    fn timestamp_is_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let err = api_invalid_input("bad");
        let after = Utc::now().timestamp_millis();
        assert!(err.body.timestamp >= before && err.body.timestamp <= after);
    }
}
