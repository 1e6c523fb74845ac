//! Creation and modification bookkeeping attached to every resource.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who created, last modified, and owns a resource, and when.
///
/// The service persists metadata exactly as the client sends it; the user ids
/// refer to app users managed by another service.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceMetadata {
    pub resource_creator: i32,
    pub resource_creation_date_time: Option<DateTime<Utc>>,
    pub last_modifier: i32,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub resource_owner: i32,
}
