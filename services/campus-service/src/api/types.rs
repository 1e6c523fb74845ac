//! HTTP API request/response types.
//!
//! # Purpose
//! Defines the payload shapes shared by the building and campus handlers and
//! used for OpenAPI schema generation. Resource payloads themselves are the
//! model types.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub service: String,
    pub api_version: String,
    pub storage_backend: String,
    pub durable_storage: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

/// Body of every non-2xx response.
///
/// `status` always equals the HTTP status code of the response carrying it.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorResponse {
    pub message: String,
    /// Milliseconds since the Unix epoch at which the error was produced.
    pub timestamp: i64,
    pub status: u16,
}
