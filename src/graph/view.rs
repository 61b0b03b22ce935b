//! Interactive graph surface.
//!
//! `GraphView` owns the display mode and a working copy of layout state on
//! top of an immutable snapshot. Direct-manipulation edits (drag moves,
//! user-drawn edges) land only in the working copy and are discarded when the
//! snapshot is replaced; they never flow back to the upstream data source.

use std::collections::HashMap;

use tracing::debug;

use super::types::{EntityGraph, GraphEdge, Position};
use super::visual::{edge_visual, node_visual, DisplayMode, EdgeVisual, NodeVisual};

/// View-local working state over one graph snapshot
#[derive(Debug, Clone)]
pub struct GraphView {
    graph: EntityGraph,
    mode: DisplayMode,
    /// Working positions, seeded from producer hints and mutated by drags
    positions: HashMap<String, Position>,
    /// Edges drawn by the user; rendered but never persisted upstream
    sketched_edges: Vec<GraphEdge>,
    node_visuals: HashMap<String, NodeVisual>,
    edge_visuals: HashMap<String, EdgeVisual>,
}

impl GraphView {
    pub fn new(graph: EntityGraph) -> Self {
        let mut view = Self {
            positions: seed_positions(&graph),
            graph,
            mode: DisplayMode::default(),
            sketched_edges: Vec::new(),
            node_visuals: HashMap::new(),
            edge_visuals: HashMap::new(),
        };
        view.rederive();
        view
    }

    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Replace the snapshot wholesale (fetch-and-replace).
    ///
    /// The working copy is discarded with the old snapshot; the display mode
    /// survives because it belongs to the viewing session, not the data.
    pub fn replace_graph(&mut self, graph: EntityGraph) {
        debug!(
            entity_id = %graph.entity_id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "replacing graph snapshot"
        );
        self.positions = seed_positions(&graph);
        self.sketched_edges.clear();
        self.graph = graph;
        self.rederive();
    }

    /// Switch display mode and re-derive all visuals.
    ///
    /// Setting the mode already active re-derives to identical output.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.rederive();
    }

    /// The single boolean control the UI exposes for the heatmap toggle
    pub fn set_heatmap(&mut self, enabled: bool) {
        self.set_mode(if enabled {
            DisplayMode::RiskHeatmap
        } else {
            DisplayMode::Normal
        });
    }

    /// Record a drag move. Unknown node ids are ignored; there is nothing to
    /// move and nothing to corrupt.
    pub fn move_node(&mut self, node_id: &str, x: f32, y: f32) {
        if self.graph.has_node(node_id) {
            self.positions
                .insert(node_id.to_string(), Position { x, y });
        }
    }

    pub fn position(&self, node_id: &str) -> Option<Position> {
        self.positions.get(node_id).copied()
    }

    /// Add a user-drawn edge to the working copy and derive its visual
    pub fn sketch_edge(&mut self, source: &str, target: &str, label: Option<&str>) -> String {
        let id = format!("sketch-{}", self.sketched_edges.len() + 1);
        let edge = GraphEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            ownership_percentage: None,
            label: label.map(|l| l.to_string()),
        };
        self.edge_visuals.insert(id.clone(), edge_visual(&edge));
        self.sketched_edges.push(edge);
        id
    }

    pub fn sketched_edges(&self) -> &[GraphEdge] {
        &self.sketched_edges
    }

    pub fn node_visual(&self, node_id: &str) -> Option<&NodeVisual> {
        self.node_visuals.get(node_id)
    }

    pub fn edge_visual(&self, edge_id: &str) -> Option<&EdgeVisual> {
        self.edge_visuals.get(edge_id)
    }

    pub fn node_visuals(&self) -> &HashMap<String, NodeVisual> {
        &self.node_visuals
    }

    pub fn edge_visuals(&self) -> &HashMap<String, EdgeVisual> {
        &self.edge_visuals
    }

    /// Recompute every derived visual from the current snapshot and mode.
    ///
    /// Called on both re-derivation triggers (snapshot replacement, mode
    /// change); nothing is memoized across calls.
    fn rederive(&mut self) {
        self.node_visuals = self
            .graph
            .nodes
            .iter()
            .map(|n| (n.id.clone(), node_visual(n, self.mode)))
            .collect();
        self.edge_visuals = self
            .graph
            .edges
            .iter()
            .chain(self.sketched_edges.iter())
            .map(|e| (e.id.clone(), edge_visual(e)))
            .collect();
    }
}

fn seed_positions(graph: &EntityGraph) -> HashMap<String, Position> {
    graph
        .nodes
        .iter()
        .filter_map(|n| n.position_hint.map(|p| (n.id.clone(), p)))
        .collect()
}
