//! Entity Nexus - Provenance-Aware Entity Viewer
//!
//! This crate implements the data model and interaction core for inspecting a
//! resolved business entity: its consolidated golden record, the lineage of
//! each attribute value, and its relationship graph with an optional risk
//! heatmap encoding.
//!
//! ## Flow
//! Upstream payload -> schema resolution (dictionary rows) or pass-through
//! (entity/graph payloads) -> session slices -> visual derivation -> views.
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_nexus::graph::{node_visual, DisplayMode, GraphNode};
//!
//! let node = GraphNode {
//!     id: "n1".to_string(),
//!     display_name: "Acme Holdings".to_string(),
//!     risk_score: Some(82.0),
//!     position_hint: None,
//! };
//! let visual = node_visual(&node, DisplayMode::RiskHeatmap);
//! assert_eq!(visual.label, "Acme Holdings\nrisk: 82");
//! ```

// Core error handling
pub mod error;

// Canonical-field resolution for heterogeneous upstream records
pub mod schema;

// Golden record and per-attribute provenance
pub mod lineage;

// Relationship graph: snapshot types, visual encoding, interactive view
pub mod graph;

// Read-only golden-record projection
pub mod record;

// Reference-module metadata
pub mod reference;

// Viewing-session state and fetch-and-replace discipline
pub mod session;

// Upstream HTTP boundary
pub mod client;

// File-backed stores serving that boundary locally
pub mod store;

// REST API (when the server feature is enabled)
#[cfg(feature = "server")]
pub mod api;

pub use client::NexusClient;
pub use error::{NexusError, Result};
pub use graph::{DisplayMode, EntityGraph, GraphEdge, GraphNode, GraphView, RiskBand};
pub use lineage::{GoldenRecord, LineageEntry, ProvenanceTooltip};
pub use record::{record_rows, RecordRow};
pub use reference::{ModuleCategory, ModuleInfo};
pub use schema::{resolve, AliasTable};
pub use session::ViewerSession;
