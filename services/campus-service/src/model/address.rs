//! Postal address value object shared by buildings and campuses.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub unit_street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}
