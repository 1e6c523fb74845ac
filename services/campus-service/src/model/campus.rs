//! Campus document.
use super::{Address, Building, ResourceMetadata};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A training campus grouping one or more buildings.
///
/// Both `name` and `abbr_name` are lookup keys: a find-by-name query matches
/// either of them. `id` is an opaque store-assigned string.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbr_name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub training_manager_id: i32,
    #[serde(default)]
    pub staging_manager_id: i32,
    #[serde(default)]
    pub hr_lead_id: i32,
    /// Buildings on this campus, in display order.
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub corporate_employees: Vec<i32>,
    #[serde(default)]
    pub resource_metadata: ResourceMetadata,
}

impl Campus {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether `name` is this campus's full or abbreviated name.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.abbr_name == name
    }
}
