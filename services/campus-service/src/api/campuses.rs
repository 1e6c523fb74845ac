//! Campus API handlers.
//!
//! # Purpose
//! Maps the `/v2/campus` routes onto [`CampusService`](crate::service::CampusService)
//! calls. Campus ids travel as opaque path strings; manager ids must parse as
//! integers before the service sees them.
use crate::api::error::ApiError;
use crate::api::{parse_path_id, payload};
use crate::app::AppState;
use crate::model::Campus;
use crate::service::require_payload;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/v2/campus",
    tag = "campuses",
    responses(
        (status = 200, description = "All campuses", body = [Campus])
    )
)]
pub(crate) async fn list_campuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Campus>>, ApiError> {
    Ok(Json(state.campuses.find_all().await?))
}

#[utoipa::path(
    post,
    path = "/v2/campus",
    tag = "campuses",
    request_body = Campus,
    responses(
        (status = 201, description = "Campus created", body = Campus),
        (status = 400, description = "Missing or malformed payload", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_campus(
    State(state): State<AppState>,
    body: Result<Json<Option<Campus>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let saved = state.campuses.save(payload(body)?).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put,
    path = "/v2/campus",
    tag = "campuses",
    request_body = Campus,
    responses(
        (status = 200, description = "Campus replaced", body = Campus),
        (status = 400, description = "Missing or malformed payload", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_campus(
    State(state): State<AppState>,
    body: Result<Json<Option<Campus>>, JsonRejection>,
) -> Result<Json<Campus>, ApiError> {
    let campus = require_payload(payload(body)?, "campus")?;
    Ok(Json(state.campuses.update(campus).await?))
}

#[utoipa::path(
    get,
    path = "/v2/campus/{id}",
    tag = "campuses",
    params(("id" = String, Path, description = "Campus id")),
    responses(
        (status = 200, description = "Fetch campus", body = Campus),
        (status = 400, description = "Blank, zero or negative id", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Campus not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_campus(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Campus>, ApiError> {
    Ok(Json(state.campuses.find_by_id(&id).await?))
}

#[utoipa::path(
    delete,
    path = "/v2/campus/{id}",
    tag = "campuses",
    params(("id" = String, Path, description = "Campus id")),
    responses(
        (status = 204, description = "Campus deleted"),
        (status = 400, description = "Blank, zero or negative id", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_campus(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.campuses.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/v2/campus/name/{name}",
    tag = "campuses",
    params(("name" = String, Path, description = "Full or abbreviated campus name")),
    responses(
        (status = 200, description = "Campus with the name", body = Campus),
        (status = 404, description = "Campus not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn campus_by_name(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Campus>, ApiError> {
    Ok(Json(state.campuses.find_by_name(&name).await?))
}

#[utoipa::path(
    get,
    path = "/v2/campus/training-manager/{id}",
    tag = "campuses",
    params(("id" = i32, Path, description = "Training manager id")),
    responses(
        (status = 200, description = "Campus run by the training manager", body = Campus),
        (status = 400, description = "Id is not a positive integer", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Campus not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn campus_by_training_manager(
    Path(manager_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Campus>, ApiError> {
    let manager_id = parse_path_id(&manager_id, "training manager id")?;
    Ok(Json(
        state.campuses.find_by_training_manager_id(manager_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/v2/campus/staging-manager/{id}",
    tag = "campuses",
    params(("id" = i32, Path, description = "Staging manager id")),
    responses(
        (status = 200, description = "Campus run by the staging manager", body = Campus),
        (status = 400, description = "Id is not a positive integer", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Campus not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn campus_by_staging_manager(
    Path(manager_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Campus>, ApiError> {
    let manager_id = parse_path_id(&manager_id, "staging manager id")?;
    Ok(Json(
        state.campuses.find_by_staging_manager_id(manager_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/v2/campus/hr-lead/{id}",
    tag = "campuses",
    params(("id" = i32, Path, description = "HR lead id")),
    responses(
        (status = 200, description = "Campus with the HR lead", body = Campus),
        (status = 400, description = "Id is not a positive integer", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Campus not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn campus_by_hr_lead(
    Path(hr_lead_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Campus>, ApiError> {
    let hr_lead_id = parse_path_id(&hr_lead_id, "hr lead id")?;
    Ok(Json(state.campuses.find_by_hr_lead_id(hr_lead_id).await?))
}
