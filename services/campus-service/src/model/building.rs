//! Building document.
use super::{Address, ResourceMetadata};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physical building used for training.
///
/// `id` is assigned by the store on first save and is `None` until then.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Address,
    /// App user that owns the building.
    #[serde(default)]
    pub owner_id: i32,
    #[serde(default)]
    pub training_lead_id: i32,
    #[serde(default)]
    pub resource_metadata: ResourceMetadata,
}

impl Building {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
