#![cfg(feature = "pg-tests")]

use campus_service::config::PostgresConfig;
use campus_service::model::{Building, Campus};
use campus_service::service::{BuildingService, CampusService, ServiceError};
use campus_service::store::postgres::PostgresStore;
use campus_service::store::{BuildingStore, CampusStore, ResourceStore};
use serial_test::serial;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

async fn reset_postgres(url: &str) -> Result<(), sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect(url)
        .await?;
    sqlx::query("TRUNCATE buildings, campuses RESTART IDENTITY")
        .execute(&pool)
        .await?;
    sqlx::query("ALTER SEQUENCE campus_id_seq RESTART WITH 1")
        .execute(&pool)
        .await?;
    Ok(())
}

/// Connect (running migrations) and start from empty tables, or skip.
async fn pg_store() -> Option<Arc<PostgresStore>> {
    let url = match std::env::var("RMS_CAMPUS_POSTGRES_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping pg-tests: set RMS_CAMPUS_POSTGRES_URL or DATABASE_URL");
            return None;
        }
    };
    let pg_cfg = PostgresConfig {
        url: url.clone(),
        max_connections: 5,
        connect_timeout_ms: 5_000,
        acquire_timeout_ms: 5_000,
    };
    let store = match PostgresStore::connect(&pg_cfg).await {
        Ok(store) => store,
        Err(err) => {
            eprintln!("skipping pg-tests: connect postgres store failed: {err}");
            return None;
        }
    };
    if let Err(err) = reset_postgres(&url).await {
        eprintln!("skipping pg-tests: cannot reset tables: {err}");
        return None;
    }
    Some(Arc::new(store))
}

fn building(name: &str, owner_id: i32, training_lead_id: i32) -> Building {
    Building {
        name: name.to_string(),
        owner_id,
        training_lead_id,
        ..Building::default()
    }
}

fn campus(name: &str, abbr_name: &str, managers: (i32, i32, i32)) -> Campus {
    Campus {
        name: name.to_string(),
        abbr_name: abbr_name.to_string(),
        training_manager_id: managers.0,
        staging_manager_id: managers.1,
        hr_lead_id: managers.2,
        buildings: vec![building("Muma Hall", 1, 2).with_id(1)],
        corporate_employees: vec![5, 6],
        ..Campus::default()
    }
}

#[tokio::test]
#[serial]
async fn building_documents_round_trip_through_postgres() {
    let Some(store) = pg_store().await else {
        return;
    };
    store.health_check().await.expect("health");
    assert!(store.is_durable());
    assert_eq!(store.backend_name(), "postgres");

    let first = store
        .save_building(building("Muma Hall", 7, 9))
        .await
        .expect("save");
    let second = store
        .save_building(building("Cooper Hall", 7, 10))
        .await
        .expect("save");
    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));

    assert_eq!(store.find_building(1).await.expect("find"), Some(first.clone()));
    assert_eq!(store.list_buildings().await.expect("list").len(), 2);
    assert_eq!(
        store.find_buildings_by_owner(7).await.expect("owner").len(),
        2
    );
    assert_eq!(
        store
            .find_building_by_training_lead(10)
            .await
            .expect("lead")
            .map(|b| b.name),
        Some("Cooper Hall".to_string())
    );
    assert_eq!(
        store
            .find_building_by_name("Muma Hall")
            .await
            .expect("name")
            .and_then(|b| b.id),
        Some(1)
    );

    let explicit = store
        .save_building(building("Annex", 3, 3).with_id(50))
        .await
        .expect("upsert");
    assert_eq!(explicit.id, Some(50));
    let next = store
        .save_building(building("Next", 3, 4))
        .await
        .expect("save");
    assert_eq!(next.id, Some(51));

    store.delete_building(1).await.expect("delete");
    store.delete_building(1).await.expect("delete again");
    assert_eq!(store.find_building(1).await.expect("find"), None);
}

#[tokio::test]
#[serial]
async fn campus_documents_round_trip_through_postgres() {
    let Some(store) = pg_store().await else {
        return;
    };
    let usf = store
        .save_campus(campus("University of South Florida", "USF", (2, 3, 4)))
        .await
        .expect("save");
    let id = usf.id.clone().expect("id");

    assert_eq!(store.find_campus(&id).await.expect("find"), Some(usf.clone()));
    assert_eq!(
        store.find_campus_by_name("USF").await.expect("abbr"),
        Some(usf.clone())
    );
    assert_eq!(
        store
            .find_campus_by_name("University of South Florida")
            .await
            .expect("full"),
        Some(usf.clone())
    );
    assert_eq!(
        store.find_campus_by_training_manager(2).await.expect("tm"),
        Some(usf.clone())
    );
    assert_eq!(
        store.find_campus_by_staging_manager(3).await.expect("sm"),
        Some(usf.clone())
    );
    assert_eq!(
        store.find_campus_by_hr_lead(4).await.expect("hr"),
        Some(usf.clone())
    );

    let sarasota = store
        .save_campus(campus("USF Sarasota-Manatee", "USFSM", (2, 8, 9)).with_id("sarasota"))
        .await
        .expect("upsert");
    let listed: Vec<Option<String>> = store
        .list_campuses()
        .await
        .expect("list")
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed, vec![Some(id.clone()), sarasota.id.clone()]);
    assert_eq!(
        store
            .find_campus_by_training_manager(2)
            .await
            .expect("lowest id")
            .and_then(|c| c.id),
        Some(id.clone())
    );

    store.delete_campus(&id).await.expect("delete");
    assert_eq!(store.find_campus(&id).await.expect("find"), None);
}

#[tokio::test]
#[serial]
async fn explicit_ids_only_move_the_sequence_forward() {
    let Some(store) = pg_store().await else {
        return;
    };
    store
        .save_building(building("Zero", 1, 1).with_id(0))
        .await
        .expect("upsert zero");
    let first = store
        .save_building(building("First", 1, 2))
        .await
        .expect("save");
    assert_eq!(first.id, Some(1));

    store
        .save_campus(campus("Explicit", "EXP", (1, 1, 1)).with_id("1"))
        .await
        .expect("upsert one");
    let generated = store
        .save_campus(campus("Generated", "GEN", (2, 2, 2)))
        .await
        .expect("save");
    assert_eq!(generated.id.as_deref(), Some("2"));

    store
        .save_building(building("Edge", 1, 3).with_id(i64::MAX))
        .await
        .expect("upsert max");
    let after = store
        .save_building(building("After", 1, 4))
        .await
        .expect("save after max");
    assert_eq!(after.id, Some(2));
    assert!(store.find_building(i64::MAX).await.expect("find").is_some());
}

#[tokio::test]
#[serial]
async fn services_over_postgres_keep_the_error_policy() {
    let Some(store) = pg_store().await else {
        return;
    };
    let buildings = BuildingService::new(store.clone());
    let campuses = CampusService::new(store);

    assert!(matches!(
        buildings.find_by_id(404).await,
        Err(ServiceError::ResourceNotFound(_))
    ));
    assert!(matches!(
        campuses.find_by_id("0").await,
        Err(ServiceError::InvalidInput(_))
    ));
    let saved = campuses
        .save(Some(campus("University of South Florida", "USF", (2, 3, 4))))
        .await
        .expect("save");
    assert_eq!(campuses.find_by_name("USF").await.expect("abbr"), saved);
}
