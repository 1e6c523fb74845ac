//! Campus-service HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! The legacy `/building` routes reuse the `/v2` handlers, so both surfaces
//! share one status policy.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::observability;
use crate::service::{BuildingService, CampusService};
use crate::store::ResourceStore;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

pub const SERVICE_NAME: &str = "campus-service";
pub const API_VERSION: &str = "v2";

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub api_version: String,
    pub buildings: BuildingService,
    pub campuses: CampusService,
    pub store: Arc<dyn ResourceStore>,
}

impl AppState {
    /// Wire both services and the system endpoints to one shared store.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ResourceStore + 'static,
    {
        Self {
            service_name: SERVICE_NAME.to_string(),
            api_version: API_VERSION.to_string(),
            buildings: BuildingService::new(store.clone()),
            campuses: CampusService::new(store.clone()),
            store,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route("/v2/system/info", get(api::system::system_info))
        .route("/v2/system/health", get(api::system::system_health))
        .merge(building_routes())
        .merge(legacy_building_routes())
        .merge(campus_routes())
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v2/openapi.json", ApiDoc::openapi()),
        )
        .layer(trace_layer)
        .with_state(state)
}

fn building_routes() -> Router<AppState> {
    use api::buildings::*;
    Router::new()
        .route(
            "/v2/building",
            get(list_buildings)
                .post(create_building)
                .put(update_building),
        )
        .route(
            "/v2/building/:id",
            get(get_building).delete(delete_building),
        )
        .route("/v2/building/owner/:id", get(buildings_by_owner))
        .route("/v2/building/trainer/:id", get(building_by_trainer))
        .route("/v2/building/name/:name", get(building_by_name))
}

fn legacy_building_routes() -> Router<AppState> {
    use api::buildings::*;
    Router::new()
        .route(
            "/building",
            get(list_buildings)
                .post(create_building)
                .put(update_building),
        )
        .route(
            "/building/id/:id",
            get(get_building).delete(delete_building),
        )
        .route("/building/owners/id/:id", get(buildings_by_owner))
        .route("/building/trainers/id/:id", get(building_by_trainer))
}

fn campus_routes() -> Router<AppState> {
    use api::campuses::*;
    Router::new()
        .route(
            "/v2/campus",
            get(list_campuses).post(create_campus).put(update_campus),
        )
        .route("/v2/campus/:id", get(get_campus).delete(delete_campus))
        .route("/v2/campus/name/:name", get(campus_by_name))
        .route(
            "/v2/campus/training-manager/:id",
            get(campus_by_training_manager),
        )
        .route(
            "/v2/campus/staging-manager/:id",
            get(campus_by_staging_manager),
        )
        .route("/v2/campus/hr-lead/:id", get(campus_by_hr_lead))
}
