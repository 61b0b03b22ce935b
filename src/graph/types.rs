//! Graph snapshot types for entity relationship visualization.
//!
//! These types are the intermediate representation between the upstream graph
//! endpoint and the rendering layer. A snapshot is immutable once built and is
//! replaced wholesale when a new entity's graph is fetched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Layout position in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A node in the relationship graph: one related business entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GraphNode {
    /// Unique within one graph snapshot
    pub id: String,
    /// Label rendered on the node
    #[serde(default, alias = "label")]
    pub display_name: String,
    /// Risk score in [0, 100]; absent when the entity is unscored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    /// Producer-suggested position; the view may override it locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_hint: Option<Position>,
}

/// An edge connecting two nodes of the same snapshot.
///
/// `source`/`target` must reference node ids present in the snapshot; that is
/// the producer's contract and is not re-validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Ownership stake in [0, 100]; drives the edge label when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Wire shape of `GET /graph/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// One entity's relationship neighborhood, stamped at fetch time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityGraph {
    /// Identity of this snapshot, for caching/deduplication
    pub snapshot_id: Uuid,
    /// Entity whose neighborhood this is
    pub entity_id: String,
    pub fetched_at: DateTime<Utc>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl EntityGraph {
    /// Build a snapshot from a fetched payload
    pub fn from_payload(entity_id: impl Into<String>, payload: GraphPayload) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            entity_id: entity_id.into(),
            fetched_at: Utc::now(),
            nodes: payload.nodes,
            edges: payload.edges,
        }
    }

    /// Empty snapshot, the degraded state after a failed graph fetch
    pub fn empty(entity_id: impl Into<String>) -> Self {
        Self::from_payload(entity_id, GraphPayload::default())
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
