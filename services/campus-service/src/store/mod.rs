//! Resource store abstraction.
//!
//! # Purpose
//! Defines the document-store contract the validation services delegate to,
//! plus the in-memory and Postgres implementations.
//!
//! # Key invariants
//! - Saving an entity without an id assigns the next id from the store's
//!   sequence; saving with an id replaces (or creates) the document at that id.
//! - Lookups report absence as `None`; turning absence into an error is the
//!   service layer's job.
//! - Deleting a missing id is not an error.
use crate::model::{Building, Campus};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("document encoding error: {0}")]
    Document(#[from] serde_json::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait BuildingStore: Send + Sync {
    async fn save_building(&self, building: Building) -> StoreResult<Building>;
    async fn find_building(&self, id: i64) -> StoreResult<Option<Building>>;
    async fn list_buildings(&self) -> StoreResult<Vec<Building>>;
    async fn find_buildings_by_owner(&self, owner_id: i32) -> StoreResult<Vec<Building>>;
    async fn find_building_by_training_lead(
        &self,
        training_lead_id: i32,
    ) -> StoreResult<Option<Building>>;
    async fn find_building_by_name(&self, name: &str) -> StoreResult<Option<Building>>;
    async fn delete_building(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait CampusStore: Send + Sync {
    async fn save_campus(&self, campus: Campus) -> StoreResult<Campus>;
    async fn find_campus(&self, id: &str) -> StoreResult<Option<Campus>>;
    async fn list_campuses(&self) -> StoreResult<Vec<Campus>>;
    /// Match on either the full or the abbreviated campus name.
    async fn find_campus_by_name(&self, name: &str) -> StoreResult<Option<Campus>>;
    async fn find_campus_by_training_manager(&self, manager_id: i32)
    -> StoreResult<Option<Campus>>;
    async fn find_campus_by_staging_manager(&self, manager_id: i32)
    -> StoreResult<Option<Campus>>;
    async fn find_campus_by_hr_lead(&self, hr_lead_id: i32) -> StoreResult<Option<Campus>>;
    async fn delete_campus(&self, id: &str) -> StoreResult<()>;
}

/// Full store surface used by the running service.
#[async_trait]
pub trait ResourceStore: BuildingStore + CampusStore {
    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
