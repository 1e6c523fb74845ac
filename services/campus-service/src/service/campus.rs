use super::{ServiceResult, not_found, require_opaque_id, require_payload, require_positive};
use crate::model::Campus;
use crate::store::CampusStore;
use std::sync::Arc;

const RESOURCE: &str = "campus";

/// Precondition-checking facade over a [`CampusStore`].
///
/// Campus ids are opaque strings. Manager ids used as lookup keys must be
/// positive.
#[derive(Clone)]
pub struct CampusService {
    store: Arc<dyn CampusStore>,
}

impl CampusService {
    pub fn new(store: Arc<dyn CampusStore>) -> Self {
        Self { store }
    }

    /// A missing payload is invalid input, the same as for buildings.
    pub async fn save(&self, candidate: Option<Campus>) -> ServiceResult<Campus> {
        let campus = require_payload(candidate, RESOURCE)?;
        Ok(self.store.save_campus(campus).await?)
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Campus>> {
        Ok(self.store.list_campuses().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> ServiceResult<Campus> {
        require_opaque_id(id, RESOURCE)?;
        self.store
            .find_campus(id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("id {id:?}")))
    }

    /// Look a campus up by its full or abbreviated name.
    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Campus> {
        self.store
            .find_campus_by_name(name)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("name {name:?}")))
    }

    pub async fn find_by_training_manager_id(&self, manager_id: i32) -> ServiceResult<Campus> {
        require_positive(manager_id.into(), RESOURCE, "training manager id")?;
        self.store
            .find_campus_by_training_manager(manager_id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("training manager {manager_id}")))
    }

    pub async fn find_by_staging_manager_id(&self, manager_id: i32) -> ServiceResult<Campus> {
        require_positive(manager_id.into(), RESOURCE, "staging manager id")?;
        self.store
            .find_campus_by_staging_manager(manager_id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("staging manager {manager_id}")))
    }

    pub async fn find_by_hr_lead_id(&self, hr_lead_id: i32) -> ServiceResult<Campus> {
        require_positive(hr_lead_id.into(), RESOURCE, "hr lead id")?;
        self.store
            .find_campus_by_hr_lead(hr_lead_id)
            .await?
            .ok_or_else(|| not_found(RESOURCE, format!("hr lead {hr_lead_id}")))
    }

    /// Full replacement by id; an id that is not stored yet is created.
    pub async fn update(&self, campus: Campus) -> ServiceResult<Campus> {
        Ok(self.store.save_campus(campus).await?)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        require_opaque_id(id, RESOURCE)?;
        self.store.delete_campus(id).await?;
        tracing::debug!(id, "campus deleted");
        Ok(())
    }
}
