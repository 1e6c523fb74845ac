//! Campus-service HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules plus the extraction helpers they share:
//! path ids are taken as raw strings and parsed here so a malformed id is a
//! 400 with the standard error body rather than axum's plain-text rejection.
pub mod buildings;
pub mod campuses;
pub mod error;
pub mod openapi;
pub mod system;
pub mod types;

use crate::api::error::{ApiError, api_invalid_input};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use std::str::FromStr;

pub(crate) fn parse_path_id<T: FromStr>(raw: &str, field: &str) -> Result<T, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| api_invalid_input(&format!("{field} must be an integer, got {raw:?}")))
}

/// Unwrap a JSON body; a `null` body comes back as `None`.
pub(crate) fn payload<T>(body: Result<Json<Option<T>>, JsonRejection>) -> Result<Option<T>, ApiError> {
    let Json(candidate) = body?;
    Ok(candidate)
}
