//! Entity endpoints: golden record and per-field lineage.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::lineage::GoldenRecord;

use super::AppState;

/// GET /entities/{entity_id}/golden-record
pub async fn get_golden_record(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
) -> Result<Json<GoldenRecord>, (StatusCode, String)> {
    state
        .entities
        .golden_record(&entity_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Entity not found: {}", entity_id),
            )
        })
}

/// GET /entities/{entity_id}/lineage/{field}
///
/// An entity or field without lineage returns an empty object; absence of
/// provenance is a valid state, not an error.
pub async fn get_field_lineage(
    State(state): State<AppState>,
    Path((entity_id, field)): Path<(String, String)>,
) -> Json<Value> {
    let entry = state
        .entities
        .golden_record(&entity_id)
        .and_then(|record| record.lineage_for(&field));
    match entry {
        Some(entry) => Json(json!(entry)),
        None => Json(json!({})),
    }
}
