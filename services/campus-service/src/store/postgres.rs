//! Postgres-backed implementation of the resource store.
//!
//! # What this module is
//! Postgres used as a document store. Every building and campus is one JSONB
//! document in a two-column table (`id`, `document`). The id lives only in the
//! key column; the rest of the entity is the document.
//!
//! # Key invariants
//! - Building ids come from the `buildings_id_seq` sequence; campus ids come
//!   from `campus_id_seq` rendered as text.
//! - Saving with an explicit id is an upsert on the key column and pushes the
//!   sequence past that id, so generated ids never collide with it.
//! - Derived-field lookups are JSONB containment (`@>`) or `->>` extraction
//!   queries; single-result lookups return the lowest id.
//!
//! # Concurrency model
//! The store is shared across handlers; `sqlx::PgPool` manages connections.
//! Concurrent upserts of the same id resolve as last write wins.
//!
//! # Operational notes
//! - Migrations run at startup via `sqlx::migrate!("./migrations")`.
//! - Pool acquire and initial connect are both bounded by timeouts.
//! - Database URLs may contain credentials; never log them.
use super::{BuildingStore, CampusStore, ResourceStore, StoreError, StoreResult};
use crate::config::PostgresConfig;
use crate::model::{Building, Campus};
use anyhow::anyhow;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use std::time::Duration;

/// Move a sequence past an explicit id, only when its next value would not
/// already be greater. `bigint` max never advances it, so later generated ids
/// keep working.
const ADVANCE_BUILDING_SEQ: &str = "SELECT setval('buildings_id_seq', $1, true) \
     FROM buildings_id_seq \
     WHERE CASE WHEN is_called THEN $1 > last_value ELSE $1 >= last_value END \
       AND $1 < 9223372036854775807";

const ADVANCE_CAMPUS_SEQ: &str = "SELECT setval('campus_id_seq', $1, true) \
     FROM campus_id_seq \
     WHERE CASE WHEN is_called THEN $1 > last_value ELSE $1 >= last_value END \
       AND $1 < 9223372036854775807";

/// Sort campuses with numeric ids first (numerically), then the rest by text.
const CAMPUS_ORDER: &str = "(id !~ '^-?[0-9]{1,18}$'), \
     CASE WHEN id ~ '^-?[0-9]{1,18}$' THEN id::bigint END, id";

/// Durable resource store backed by Postgres.
///
/// # Errors
/// Connection, query, and document decoding failures surface as [`StoreError`].
///
/// # Example
/// ```rust,no_run
/// use campus_service::config::PostgresConfig;
/// use campus_service::store::postgres::PostgresStore;
///
/// async fn open(pg: PostgresConfig) {
///     let _ = PostgresStore::connect(&pg).await;
/// }
/// ```
pub struct PostgresStore {
    pool: PgPool,
}

/// Row shape for the `buildings` table.
#[derive(Debug, Clone, FromRow)]
struct BuildingRow {
    id: i64,
    document: Value,
}

/// Row shape for the `campuses` table.
#[derive(Debug, Clone, FromRow)]
struct CampusRow {
    id: String,
    document: Value,
}

impl PostgresStore {
    /// Connect to Postgres and apply the embedded migrations.
    ///
    /// # Errors
    /// - Invalid URL, connect timeout, pool setup, or migration failures.
    pub async fn connect(pg: &PostgresConfig) -> StoreResult<Self> {
        let connect_options = PgConnectOptions::from_str(&pg.url)?;
        let connect = PgPoolOptions::new()
            .max_connections(pg.max_connections)
            .acquire_timeout(Duration::from_millis(pg.acquire_timeout_ms))
            .connect_with(connect_options);
        let pool = tokio::time::timeout(Duration::from_millis(pg.connect_timeout_ms), connect)
            .await
            .map_err(|_| StoreError::Unexpected(anyhow!("timed out connecting to postgres")))??;

        // Handlers assume the schema exists; refuse to start without it.
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(
            max_connections = pg.max_connections,
            "postgres resource store ready"
        );
        Ok(Self { pool })
    }
}

/// Serialize an entity into its stored document, dropping the top-level `id`
/// since it is kept in the key column.
fn to_document<T: Serialize>(entity: &T) -> StoreResult<Value> {
    let mut value = serde_json::to_value(entity)?;
    if let Value::Object(fields) = &mut value {
        fields.remove("id");
    }
    Ok(value)
}

fn building_from_row(row: BuildingRow) -> StoreResult<Building> {
    let building: Building = serde_json::from_value(row.document)?;
    Ok(building.with_id(row.id))
}

fn campus_from_row(row: CampusRow) -> StoreResult<Campus> {
    let campus: Campus = serde_json::from_value(row.document)?;
    Ok(campus.with_id(row.id))
}

impl PostgresStore {
    /// First building (lowest id) whose document has `field` equal to `value`.
    ///
    /// `field` must come from the fixed set of document keys used in this
    /// module; it is interpolated into the SQL text.
    async fn building_where(&self, field: &str, value: Value) -> StoreResult<Option<Building>> {
        let query = format!(
            "SELECT id, document FROM buildings WHERE document @> jsonb_build_object('{field}', $1::jsonb) \
             ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, BuildingRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.map(building_from_row).transpose()
    }

    /// First campus (lowest id) whose document has `field` equal to `value`.
    ///
    /// `field` must come from the fixed set of document keys used in this
    /// module; it is interpolated into the SQL text.
    async fn campus_where(&self, field: &str, value: i32) -> StoreResult<Option<Campus>> {
        let query = format!(
            "SELECT id, document FROM campuses WHERE document @> jsonb_build_object('{field}', $1::int) \
             ORDER BY {CAMPUS_ORDER} LIMIT 1"
        );
        let row = sqlx::query_as::<_, CampusRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.map(campus_from_row).transpose()
    }
}

#[async_trait]
impl BuildingStore for PostgresStore {
    async fn save_building(&self, building: Building) -> StoreResult<Building> {
        let document = to_document(&building)?;
        let id = match building.id {
            None => {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO buildings (document) VALUES ($1) RETURNING id",
                )
                .bind(&document)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                let mut tx = self.pool.begin().await?;
                sqlx::query(
                    "INSERT INTO buildings (id, document) VALUES ($1, $2) \
                     ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document",
                )
                .bind(id)
                .bind(&document)
                .execute(&mut *tx)
                .await?;
                sqlx::query(ADVANCE_BUILDING_SEQ)
                .bind(id)
                .execute(&mut *tx)
                .await?;
                tx.commit().await?;
                id
            }
        };
        Ok(building.with_id(id))
    }

    async fn find_building(&self, id: i64) -> StoreResult<Option<Building>> {
        let row = sqlx::query_as::<_, BuildingRow>(
            "SELECT id, document FROM buildings WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(building_from_row).transpose()
    }

    async fn list_buildings(&self) -> StoreResult<Vec<Building>> {
        let rows = sqlx::query_as::<_, BuildingRow>(
            "SELECT id, document FROM buildings ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(building_from_row).collect()
    }

    async fn find_buildings_by_owner(&self, owner_id: i32) -> StoreResult<Vec<Building>> {
        let rows = sqlx::query_as::<_, BuildingRow>(
            "SELECT id, document FROM buildings \
             WHERE document @> jsonb_build_object('ownerId', $1::int) ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(building_from_row).collect()
    }

    async fn find_building_by_training_lead(
        &self,
        training_lead_id: i32,
    ) -> StoreResult<Option<Building>> {
        self.building_where("trainingLeadId", Value::from(training_lead_id))
            .await
    }

    async fn find_building_by_name(&self, name: &str) -> StoreResult<Option<Building>> {
        self.building_where("name", Value::from(name)).await
    }

    async fn delete_building(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CampusStore for PostgresStore {
    async fn save_campus(&self, campus: Campus) -> StoreResult<Campus> {
        let document = to_document(&campus)?;
        let id = match campus.id.clone() {
            None => {
                sqlx::query_scalar::<_, String>(
                    "INSERT INTO campuses (id, document) \
                     VALUES (nextval('campus_id_seq')::text, $1) RETURNING id",
                )
                .bind(&document)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                let mut tx = self.pool.begin().await?;
                sqlx::query(
                    "INSERT INTO campuses (id, document) VALUES ($1, $2) \
                     ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document",
                )
                .bind(&id)
                .bind(&document)
                .execute(&mut *tx)
                .await?;
                if let Ok(numeric) = id.parse::<i64>() {
                    sqlx::query(ADVANCE_CAMPUS_SEQ)
                    .bind(numeric)
                    .execute(&mut *tx)
                    .await?;
                }
                tx.commit().await?;
                id
            }
        };
        Ok(campus.with_id(id))
    }

    async fn find_campus(&self, id: &str) -> StoreResult<Option<Campus>> {
        let row =
            sqlx::query_as::<_, CampusRow>("SELECT id, document FROM campuses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(campus_from_row).transpose()
    }

    async fn list_campuses(&self) -> StoreResult<Vec<Campus>> {
        let query = format!("SELECT id, document FROM campuses ORDER BY {CAMPUS_ORDER}");
        let rows = sqlx::query_as::<_, CampusRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(campus_from_row).collect()
    }

    async fn find_campus_by_name(&self, name: &str) -> StoreResult<Option<Campus>> {
        let query = format!(
            "SELECT id, document FROM campuses \
             WHERE document->>'name' = $1 OR document->>'abbrName' = $1 \
             ORDER BY {CAMPUS_ORDER} LIMIT 1"
        );
        let row = sqlx::query_as::<_, CampusRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.map(campus_from_row).transpose()
    }

    async fn find_campus_by_training_manager(
        &self,
        manager_id: i32,
    ) -> StoreResult<Option<Campus>> {
        self.campus_where("trainingManagerId", manager_id).await
    }

    async fn find_campus_by_staging_manager(
        &self,
        manager_id: i32,
    ) -> StoreResult<Option<Campus>> {
        self.campus_where("stagingManagerId", manager_id).await
    }

    async fn find_campus_by_hr_lead(&self, hr_lead_id: i32) -> StoreResult<Option<Campus>> {
        self.campus_where("hrLeadId", hr_lead_id).await
    }

    async fn delete_campus(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM campuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ResourceStore for PostgresStore {
    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
