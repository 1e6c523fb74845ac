//! Call-recording store used by the service tests.
use crate::model::{Building, Campus};
use crate::store::memory::InMemoryStore;
use crate::store::{BuildingStore, CampusStore, StoreResult};
use async_trait::async_trait;
use std::sync::Mutex;

/// Delegates to an [`InMemoryStore`] and records every call as
/// `"operation(argument)"` so tests can assert what reached the store.
#[derive(Default)]
pub(crate) struct RecordingStore {
    pub(crate) inner: InMemoryStore,
    calls: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn calls_to(&self, operation: &str) -> Vec<String> {
        let prefix = format!("{operation}(");
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(&prefix))
            .collect()
    }
}

#[async_trait]
impl BuildingStore for RecordingStore {
    async fn save_building(&self, building: Building) -> StoreResult<Building> {
        self.record(format!("save_building({:?})", building.id));
        self.inner.save_building(building).await
    }

    async fn find_building(&self, id: i64) -> StoreResult<Option<Building>> {
        self.record(format!("find_building({id})"));
        self.inner.find_building(id).await
    }

    async fn list_buildings(&self) -> StoreResult<Vec<Building>> {
        self.record("list_buildings()".to_string());
        self.inner.list_buildings().await
    }

    async fn find_buildings_by_owner(&self, owner_id: i32) -> StoreResult<Vec<Building>> {
        self.record(format!("find_buildings_by_owner({owner_id})"));
        self.inner.find_buildings_by_owner(owner_id).await
    }

    async fn find_building_by_training_lead(
        &self,
        training_lead_id: i32,
    ) -> StoreResult<Option<Building>> {
        self.record(format!("find_building_by_training_lead({training_lead_id})"));
        self.inner
            .find_building_by_training_lead(training_lead_id)
            .await
    }

    async fn find_building_by_name(&self, name: &str) -> StoreResult<Option<Building>> {
        self.record(format!("find_building_by_name({name})"));
        self.inner.find_building_by_name(name).await
    }

    async fn delete_building(&self, id: i64) -> StoreResult<()> {
        self.record(format!("delete_building({id})"));
        self.inner.delete_building(id).await
    }
}

#[async_trait]
impl CampusStore for RecordingStore {
    async fn save_campus(&self, campus: Campus) -> StoreResult<Campus> {
        self.record(format!("save_campus({:?})", campus.id));
        self.inner.save_campus(campus).await
    }

    async fn find_campus(&self, id: &str) -> StoreResult<Option<Campus>> {
        self.record(format!("find_campus({id})"));
        self.inner.find_campus(id).await
    }

    async fn list_campuses(&self) -> StoreResult<Vec<Campus>> {
        self.record("list_campuses()".to_string());
        self.inner.list_campuses().await
    }

    async fn find_campus_by_name(&self, name: &str) -> StoreResult<Option<Campus>> {
        self.record(format!("find_campus_by_name({name})"));
        self.inner.find_campus_by_name(name).await
    }

    async fn find_campus_by_training_manager(
        &self,
        manager_id: i32,
    ) -> StoreResult<Option<Campus>> {
        self.record(format!("find_campus_by_training_manager({manager_id})"));
        self.inner.find_campus_by_training_manager(manager_id).await
    }

    async fn find_campus_by_staging_manager(
        &self,
        manager_id: i32,
    ) -> StoreResult<Option<Campus>> {
        self.record(format!("find_campus_by_staging_manager({manager_id})"));
        self.inner.find_campus_by_staging_manager(manager_id).await
    }

    async fn find_campus_by_hr_lead(&self, hr_lead_id: i32) -> StoreResult<Option<Campus>> {
        self.record(format!("find_campus_by_hr_lead({hr_lead_id})"));
        self.inner.find_campus_by_hr_lead(hr_lead_id).await
    }

    async fn delete_campus(&self, id: &str) -> StoreResult<()> {
        self.record(format!("delete_campus({id})"));
        self.inner.delete_campus(id).await
    }
}
