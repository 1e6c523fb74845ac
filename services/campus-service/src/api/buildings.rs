//! Building API handlers.
//!
//! # Purpose
//! Maps the `/v2/building` routes (and the legacy `/building` routes) onto
//! [`BuildingService`](crate::service::BuildingService) calls.
use crate::api::error::ApiError;
use crate::api::{parse_path_id, payload};
use crate::app::AppState;
use crate::model::Building;
use crate::service::require_payload;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/v2/building",
    tag = "buildings",
    responses(
        (status = 200, description = "All buildings", body = [Building])
    )
)]
pub(crate) async fn list_buildings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Building>>, ApiError> {
    Ok(Json(state.buildings.find_all().await?))
}

#[utoipa::path(
    post,
    path = "/v2/building",
    tag = "buildings",
    request_body = Building,
    responses(
        (status = 201, description = "Building created", body = Building),
        (status = 400, description = "Missing or malformed payload", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_building(
    State(state): State<AppState>,
    body: Result<Json<Option<Building>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let saved = state.buildings.save(payload(body)?).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put,
    path = "/v2/building",
    tag = "buildings",
    request_body = Building,
    responses(
        (status = 200, description = "Building replaced", body = Building),
        (status = 400, description = "Missing or malformed payload", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_building(
    State(state): State<AppState>,
    body: Result<Json<Option<Building>>, JsonRejection>,
) -> Result<Json<Building>, ApiError> {
    let building = require_payload(payload(body)?, "building")?;
    Ok(Json(state.buildings.update(building).await?))
}

#[utoipa::path(
    get,
    path = "/v2/building/{id}",
    tag = "buildings",
    params(("id" = i64, Path, description = "Building id")),
    responses(
        (status = 200, description = "Fetch building", body = Building),
        (status = 400, description = "Id is not a positive integer", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Building not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_building(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Building>, ApiError> {
    let id = parse_path_id(&id, "building id")?;
    Ok(Json(state.buildings.find_by_id(id).await?))
}

#[utoipa::path(
    delete,
    path = "/v2/building/{id}",
    tag = "buildings",
    params(("id" = i64, Path, description = "Building id")),
    responses(
        (status = 204, description = "Building deleted"),
        (status = 400, description = "Id is not a positive integer", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_building(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id(&id, "building id")?;
    state.buildings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/v2/building/owner/{id}",
    tag = "buildings",
    params(("id" = i32, Path, description = "Owning app-user id")),
    responses(
        (status = 200, description = "Buildings owned by the user", body = [Building]),
        (status = 400, description = "Id is not an integer", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn buildings_by_owner(
    Path(owner_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Building>>, ApiError> {
    let owner_id = parse_path_id(&owner_id, "owner id")?;
    Ok(Json(state.buildings.find_by_owner_id(owner_id).await?))
}

#[utoipa::path(
    get,
    path = "/v2/building/trainer/{id}",
    tag = "buildings",
    params(("id" = i32, Path, description = "Training lead id")),
    responses(
        (status = 200, description = "Building led by the trainer", body = Building),
        (status = 404, description = "No building for the trainer", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn building_by_trainer(
    Path(training_lead_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Building>, ApiError> {
    let training_lead_id = parse_path_id(&training_lead_id, "training lead id")?;
    Ok(Json(
        state
            .buildings
            .find_by_training_lead_id(training_lead_id)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/v2/building/name/{name}",
    tag = "buildings",
    params(("name" = String, Path, description = "Building name")),
    responses(
        (status = 200, description = "Building with the name", body = Building),
        (status = 404, description = "Building not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn building_by_name(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Building>, ApiError> {
    Ok(Json(state.buildings.find_by_name(&name).await?))
}
