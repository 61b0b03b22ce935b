//! Graph endpoint: an entity's relationship neighborhood.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::graph::GraphPayload;

use super::AppState;

/// GET /graph/{entity_id}
///
/// Unknown entities get an empty neighborhood, matching the viewer's
/// degrade-to-empty contract. Edge referential integrity is this producer's
/// responsibility: the seed store only holds edges between seeded nodes.
pub async fn get_entity_graph(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
) -> Json<GraphPayload> {
    Json(state.entities.graph(&entity_id))
}
