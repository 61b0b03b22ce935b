//! Reference-data endpoints: module listing, dictionaries, samples.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::reference::ModuleInfo;

use super::AppState;

/// GET /references/modules
pub async fn list_modules(State(state): State<AppState>) -> Json<Vec<ModuleInfo>> {
    Json(state.references.modules())
}

/// GET /references/{module_id}/dictionary
///
/// Empty list for an unknown module or unparseable file, so a viewer never
/// breaks on a missing dictionary.
pub async fn get_dictionary(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> Json<Vec<Value>> {
    Json(state.references.dictionary(&module_id))
}

/// GET /references/{module_id}/sample
pub async fn get_sample(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state
        .references
        .sample(&module_id)
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Sample not found for module: {}", module_id),
            )
        })
}
