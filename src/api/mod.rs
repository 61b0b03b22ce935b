//! REST API for the reference server.
//!
//! Serves the viewer's upstream boundary from local stores: module listings
//! and dictionaries, entity golden records with lineage, graph snapshots, and
//! the assistant chat passthrough.

pub mod agent_routes;
pub mod entity_routes;
pub mod graph_routes;
pub mod reference_routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::{EntityStore, ReferenceStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub references: Arc<ReferenceStore>,
    pub entities: Arc<EntityStore>,
    pub http: reqwest::Client,
    /// Upstream assistant URL; canned replies when unset
    pub agent_upstream: Option<String>,
}

impl AppState {
    pub fn new(
        references: ReferenceStore,
        entities: EntityStore,
        agent_upstream: Option<String>,
    ) -> Self {
        Self {
            references: Arc::new(references),
            entities: Arc::new(entities),
            http: reqwest::Client::new(),
            agent_upstream,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/references/modules", get(reference_routes::list_modules))
        .route(
            "/references/:module_id/dictionary",
            get(reference_routes::get_dictionary),
        )
        .route(
            "/references/:module_id/sample",
            get(reference_routes::get_sample),
        )
        .route(
            "/entities/:entity_id/golden-record",
            get(entity_routes::get_golden_record),
        )
        .route(
            "/entities/:entity_id/lineage/:field",
            get(entity_routes::get_field_lineage),
        )
        .route("/graph/:entity_id", get(graph_routes::get_entity_graph))
        .route("/agent/chat", post(agent_routes::chat))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
