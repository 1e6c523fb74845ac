use super::{ServiceResult, not_found, require_payload, require_positive};
use crate::model::Building;
use crate::store::BuildingStore;
use std::sync::Arc;

const RESOURCE: &str = "building";

/// Precondition-checking facade over a [`BuildingStore`].
#[derive(Clone)]
pub struct BuildingService {
    store: Arc<dyn BuildingStore>,
}

impl BuildingService {
    pub fn new(store: Arc<dyn BuildingStore>) -> Self {
        Self { store }
    }

    /// Persist a new building and return it with its assigned id.
    pub async fn save(&self, candidate: Option<Building>) -> ServiceResult<Building> {
        let building = require_payload(candidate, RESOURCE)?;
        Ok(self.store.save_building(building).await?)
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Building>> {
        Ok(self.store.list_buildings().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Building> {
        require_positive(id, RESOURCE, "id")?;
        self.store
            .find_building(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("id {id}")))
    }

    /// Every building owned by `owner_id`; empty when there are none.
    pub async fn find_by_owner_id(&self, owner_id: i32) -> ServiceResult<Vec<Building>> {
        Ok(self.store.find_buildings_by_owner(owner_id).await?)
    }

    pub async fn find_by_training_lead_id(&self, training_lead_id: i32) -> ServiceResult<Building> {
        self.store
            .find_building_by_training_lead(training_lead_id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("training lead {training_lead_id}")))
    }

    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Building> {
        self.store
            .find_building_by_name(name)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("name {name:?}")))
    }

    /// Replace the stored building with `building`. A building whose id is not
    /// stored yet is created under that id.
    pub async fn update(&self, building: Building) -> ServiceResult<Building> {
        Ok(self.store.save_building(building).await?)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        require_positive(id, RESOURCE, "id")?;
        self.store.delete_building(id).await?;
        tracing::debug!(id, "building deleted");
        Ok(())
    }
}
