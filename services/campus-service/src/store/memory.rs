//! In-memory implementation of the resource store.
//!
//! # Purpose
//! Implements [`BuildingStore`] and [`CampusStore`] with ordered maps guarded by
//! `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: each collection is one lock, so an id
//!   allocation and its insert happen atomically. Concurrent saves of the same
//!   id resolve as last write wins.
//!
//! # Identifiers
//! Each collection keeps its own sequence. Buildings get `1, 2, 3, ...`;
//! campuses get the same numbers rendered as strings. Saving under an explicit
//! numeric id moves the sequence past it so generated ids never collide.
//!
//! # Metrics
//! Keeps `rms_buildings_total` and `rms_campuses_total` gauges current.
use super::{BuildingStore, CampusStore, ResourceStore, StoreError, StoreResult};
use crate::model::{Building, Campus};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One document collection plus the sequence used to assign its ids.
#[derive(Debug)]
struct Collection<K, T> {
    /// `None` once the sequence has handed out `i64::MAX`.
    next_id: Option<i64>,
    documents: BTreeMap<K, T>,
}

impl<K: Ord, T> Collection<K, T> {
    fn new() -> Self {
        Self {
            next_id: Some(1),
            documents: BTreeMap::new(),
        }
    }

    fn allocate(&mut self) -> StoreResult<i64> {
        let id = self
            .next_id
            .ok_or_else(|| StoreError::Unexpected(anyhow!("id sequence exhausted")))?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    /// Record an id chosen by the caller so the sequence stays ahead of it.
    ///
    /// `i64::MAX` leaves the sequence where it is; moving past it would
    /// exhaust the sequence for every later save.
    fn observe(&mut self, id: i64) {
        if let (Some(next), Some(after)) = (self.next_id, id.checked_add(1)) {
            if id >= next {
                self.next_id = Some(after);
            }
        }
    }
}

/// Ordering for campus ids: numeric ids first in numeric order, then any
/// other opaque ids lexicographically.
fn campus_order(id: &str) -> (bool, i64, &str) {
    match id.parse::<i64>() {
        Ok(value) => (false, value, id),
        Err(_) => (true, 0, id),
    }
}

/// In-memory resource store.
///
/// Cloning is cheap and clones share the same collections.
#[derive(Clone)]
pub struct InMemoryStore {
    /// Buildings keyed by their numeric id.
    buildings: Arc<RwLock<Collection<i64, Building>>>,
    /// Campuses keyed by their opaque string id.
    campuses: Arc<RwLock<Collection<String, Campus>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            buildings: Arc::new(RwLock::new(Collection::new())),
            campuses: Arc::new(RwLock::new(Collection::new())),
        }
    }

    async fn first_campus_matching(
        &self,
        predicate: impl Fn(&Campus) -> bool,
    ) -> StoreResult<Option<Campus>> {
        let campuses = self.campuses.read().await;
        let found = campuses
            .documents
            .values()
            .filter(|campus| predicate(campus))
            .min_by(|a, b| {
                let a = campus_order(a.id.as_deref().unwrap_or_default());
                let b = campus_order(b.id.as_deref().unwrap_or_default());
                a.cmp(&b)
            })
            .cloned();
        Ok(found)
    }
}

#[async_trait]
impl BuildingStore for InMemoryStore {
    async fn save_building(&self, building: Building) -> StoreResult<Building> {
        // Upsert: a missing id takes the next sequence value, an explicit id
        // replaces whatever is stored there.
        let mut buildings = self.buildings.write().await;
        let id = match building.id {
            Some(id) => {
                buildings.observe(id);
                id
            }
            None => buildings.allocate()?,
        };
        let saved = building.with_id(id);
        buildings.documents.insert(id, saved.clone());
        metrics::gauge!("rms_buildings_total").set(buildings.documents.len() as f64);
        Ok(saved)
    }

    async fn find_building(&self, id: i64) -> StoreResult<Option<Building>> {
        Ok(self.buildings.read().await.documents.get(&id).cloned())
    }

    async fn list_buildings(&self) -> StoreResult<Vec<Building>> {
        Ok(self
            .buildings
            .read()
            .await
            .documents
            .values()
            .cloned()
            .collect())
    }

    async fn find_buildings_by_owner(&self, owner_id: i32) -> StoreResult<Vec<Building>> {
        let items = self
            .buildings
            .read()
            .await
            .documents
            .values()
            .filter(|building| building.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(items)
    }

    async fn find_building_by_training_lead(
        &self,
        training_lead_id: i32,
    ) -> StoreResult<Option<Building>> {
        Ok(self
            .buildings
            .read()
            .await
            .documents
            .values()
            .find(|building| building.training_lead_id == training_lead_id)
            .cloned())
    }

    async fn find_building_by_name(&self, name: &str) -> StoreResult<Option<Building>> {
        Ok(self
            .buildings
            .read()
            .await
            .documents
            .values()
            .find(|building| building.name == name)
            .cloned())
    }

    async fn delete_building(&self, id: i64) -> StoreResult<()> {
        let mut buildings = self.buildings.write().await;
        buildings.documents.remove(&id);
        metrics::gauge!("rms_buildings_total").set(buildings.documents.len() as f64);
        Ok(())
    }
}

#[async_trait]
impl CampusStore for InMemoryStore {
    async fn save_campus(&self, campus: Campus) -> StoreResult<Campus> {
        let mut campuses = self.campuses.write().await;
        let id = match campus.id.clone() {
            Some(id) => {
                if let Ok(numeric) = id.parse::<i64>() {
                    campuses.observe(numeric);
                }
                id
            }
            None => campuses.allocate()?.to_string(),
        };
        let saved = campus.with_id(id.clone());
        campuses.documents.insert(id, saved.clone());
        metrics::gauge!("rms_campuses_total").set(campuses.documents.len() as f64);
        Ok(saved)
    }

    async fn find_campus(&self, id: &str) -> StoreResult<Option<Campus>> {
        Ok(self.campuses.read().await.documents.get(id).cloned())
    }

    async fn list_campuses(&self) -> StoreResult<Vec<Campus>> {
        let mut items: Vec<Campus> = self
            .campuses
            .read()
            .await
            .documents
            .values()
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            let a = campus_order(a.id.as_deref().unwrap_or_default());
            let b = campus_order(b.id.as_deref().unwrap_or_default());
            a.cmp(&b)
        });
        Ok(items)
    }

    async fn find_campus_by_name(&self, name: &str) -> StoreResult<Option<Campus>> {
        self.first_campus_matching(|campus| campus.answers_to(name))
            .await
    }

    async fn find_campus_by_training_manager(
        &self,
        manager_id: i32,
    ) -> StoreResult<Option<Campus>> {
        self.first_campus_matching(|campus| campus.training_manager_id == manager_id)
            .await
    }

    async fn find_campus_by_staging_manager(
        &self,
        manager_id: i32,
    ) -> StoreResult<Option<Campus>> {
        self.first_campus_matching(|campus| campus.staging_manager_id == manager_id)
            .await
    }

    async fn find_campus_by_hr_lead(&self, hr_lead_id: i32) -> StoreResult<Option<Campus>> {
        self.first_campus_matching(|campus| campus.hr_lead_id == hr_lead_id)
            .await
    }

    async fn delete_campus(&self, id: &str) -> StoreResult<()> {
        let mut campuses = self.campuses.write().await;
        campuses.documents.remove(id);
        metrics::gauge!("rms_campuses_total").set(campuses.documents.len() as f64);
        Ok(())
    }
}

#[async_trait]
impl ResourceStore for InMemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        // Always healthy while the process runs.
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
