//! Validation services over the resource store.
//!
//! # Purpose
//! Gate every identifier-keyed or mutating operation with a precondition
//! check before it reaches the store, and turn "no such record" into an
//! explicit [`ServiceError::ResourceNotFound`] so callers never see a silent
//! absence.
//!
//! # Key invariants
//! - Inputs that fail a precondition never reach the store.
//! - Services hold no state of their own; clones share one store handle.
//! - Store failures pass through unchanged as [`ServiceError::Store`].
mod building;
mod campus;
#[cfg(test)]
mod test_support;

pub use building::BuildingService;
pub use campus::CampusService;

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller-supplied id or payload violates a precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A well-formed lookup key has no matching record.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

fn reject(resource: &'static str, reason: &'static str, message: String) -> ServiceError {
    metrics::counter!(
        "rms_validation_rejections_total",
        "resource" => resource,
        "reason" => reason
    )
    .increment(1);
    tracing::debug!(resource, reason, %message, "rejected request");
    ServiceError::InvalidInput(message)
}

fn not_found(resource: &'static str, key: impl std::fmt::Display) -> ServiceError {
    tracing::debug!(resource, %key, "resource not found");
    ServiceError::ResourceNotFound(format!("no {resource} found for {key}"))
}

/// Unwrap a request payload, rejecting an absent one.
pub(crate) fn require_payload<T>(candidate: Option<T>, resource: &'static str) -> ServiceResult<T> {
    candidate.ok_or_else(|| {
        reject(
            resource,
            "missing_payload",
            format!("{resource} payload is required"),
        )
    })
}

/// Numeric ids and manager ids must be strictly positive.
fn require_positive(value: i64, resource: &'static str, field: &'static str) -> ServiceResult<()> {
    if value <= 0 {
        return Err(reject(
            resource,
            "non_positive_id",
            format!("{field} must be a positive integer, got {value}"),
        ));
    }
    Ok(())
}

/// Opaque campus ids must be non-blank, must not be `"0"`, and must not be a
/// non-positive integer such as `"-1"`.
fn require_opaque_id(id: &str, resource: &'static str) -> ServiceResult<()> {
    let trimmed = id.trim();
    // Classify by characters so integers outside the i64 range are caught too.
    let negative = trimmed.starts_with('-');
    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    let numeric = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    let non_positive = numeric && (negative || digits.bytes().all(|b| b == b'0'));
    if trimmed.is_empty() || non_positive {
        return Err(reject(
            resource,
            "invalid_id",
            format!("{resource} id must be a non-empty, positive identifier, got {id:?}"),
        ));
    }
    Ok(())
}
