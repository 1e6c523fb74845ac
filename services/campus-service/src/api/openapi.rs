//! OpenAPI schema aggregation for the campus-service API.
//!
//! # Purpose
//! Collects the `/v2` routes and schema types into a single OpenAPI document
//! for the Swagger UI and client generation. Legacy `/building` aliases are
//! served but not documented.
use crate::api::{
    buildings, campuses, system,
    types::{ErrorResponse, HealthStatus, SystemInfo},
};
use crate::model::{Address, Building, Campus, ResourceMetadata};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "campus-service",
        version = "v2",
        description = "Building and campus resource API"
    ),
    paths(
        system::system_info,
        system::system_health,
        buildings::list_buildings,
        buildings::create_building,
        buildings::update_building,
        buildings::get_building,
        buildings::delete_building,
        buildings::buildings_by_owner,
        buildings::building_by_trainer,
        buildings::building_by_name,
        campuses::list_campuses,
        campuses::create_campus,
        campuses::update_campus,
        campuses::get_campus,
        campuses::delete_campus,
        campuses::campus_by_name,
        campuses::campus_by_training_manager,
        campuses::campus_by_staging_manager,
        campuses::campus_by_hr_lead
    ),
    components(schemas(
        SystemInfo,
        HealthStatus,
        ErrorResponse,
        Address,
        ResourceMetadata,
        Building,
        Campus
    )),
    tags(
        (name = "system", description = "System and discovery endpoints"),
        (name = "buildings", description = "Building management"),
        (name = "campuses", description = "Campus management")
    )
)]
pub struct ApiDoc;
