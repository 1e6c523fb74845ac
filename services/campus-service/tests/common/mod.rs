#![allow(dead_code)]

use axum::Router;
use axum::http::Request;
use axum::response::Response;
use campus_service::app::{AppState, build_router};
use campus_service::store::memory::InMemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh in-memory store.
pub fn memory_app() -> Router {
    build_router(AppState::from_store(Arc::new(InMemoryStore::new())))
}

pub async fn send(app: &Router, request: Request<axum::body::Body>) -> Response {
    app.clone().oneshot(request).await.expect("response")
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
