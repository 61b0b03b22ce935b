//! Relationship-graph model and rendering contract.
//!
//! `types` holds the snapshot data (nodes, edges, ownership percentages,
//! risk scores), `visual` derives render attributes from it under the current
//! display mode, and `view` owns the interactive working copy.

pub mod types;
pub mod view;
pub mod visual;

pub use types::{EntityGraph, GraphEdge, GraphNode, GraphPayload, Position};
pub use view::GraphView;
pub use visual::{edge_visual, node_visual, DisplayMode, EdgeVisual, NodeVisual, RiskBand};
