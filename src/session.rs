//! Viewing-session state: slices, fetch-and-replace, stale-response guard.
//!
//! One session drives one analyst view. Each upstream resource maps to one
//! state slice (module list, dictionary, sample, golden record, graph) and a
//! completed fetch replaces exactly its own slice, never merging into it.
//! Golden-record and graph fetches are independent and may complete in either
//! order.
//!
//! In-flight fetches are not cancelled, so a slow response for a previously
//! selected module/entity can arrive after the selection moved on. Every
//! `apply_*` method therefore checks the payload's id against the current
//! selection and drops stale payloads instead of overwriting fresher state.

use serde_json::Value;
use tracing::{info, warn};

use crate::client::NexusClient;
use crate::error::{NexusError, Result};
use crate::graph::{EntityGraph, GraphPayload, GraphView};
use crate::lineage::GoldenRecord;
use crate::reference::{ModuleCategory, ModuleInfo};
use crate::schema::{resolve, AliasTable, CanonicalRecord};

/// Session state for one viewer
#[derive(Debug, Default)]
pub struct ViewerSession {
    selected_module: Option<String>,
    selected_entity: Option<String>,

    modules: Vec<ModuleInfo>,
    /// Dictionary rows already resolved to the canonical shape
    dictionary: Vec<CanonicalRecord>,
    sample: Option<Value>,
    record: Option<GoldenRecord>,
    graph_view: Option<GraphView>,

    dictionary_aliases: AliasTable,
    /// Short user-visible notices from degraded fetches
    notices: Vec<String>,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self {
            dictionary_aliases: AliasTable::dictionary(),
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a module; its dictionary and sample slices are cleared until the
    /// new fetches land.
    pub fn select_module(&mut self, module_id: &str) {
        self.selected_module = Some(module_id.to_string());
        self.dictionary.clear();
        self.sample = None;
    }

    /// Select an entity; record and graph slices are cleared until the new
    /// fetches land, so a late apply for the old entity has nothing to revive.
    pub fn select_entity(&mut self, entity_id: &str) {
        self.selected_entity = Some(entity_id.to_string());
        self.record = None;
        self.graph_view = None;
    }

    pub fn selected_module(&self) -> Option<&str> {
        self.selected_module.as_deref()
    }

    pub fn selected_entity(&self) -> Option<&str> {
        self.selected_entity.as_deref()
    }

    // -------------------------------------------------------------------------
    // Apply: replace one slice, guarding against stale responses
    // -------------------------------------------------------------------------

    pub fn apply_modules(&mut self, result: Result<Vec<ModuleInfo>>) {
        match result {
            Ok(mut modules) => {
                for module in &mut modules {
                    module.category = Some(ModuleCategory::from_module_id(&module.id));
                }
                info!(count = modules.len(), "module list replaced");
                self.modules = modules;
            }
            Err(e) => self.degrade("module list", e, |s| s.modules.clear()),
        }
    }

    pub fn apply_dictionary(&mut self, module_id: &str, result: Result<Vec<Value>>) {
        if self.selected_module.as_deref() != Some(module_id) {
            warn!(module_id, "dropping stale dictionary response");
            return;
        }
        match result {
            Ok(rows) => {
                self.dictionary = rows
                    .iter()
                    .map(|row| resolve(row, &self.dictionary_aliases))
                    .collect();
            }
            Err(e) => self.degrade("dictionary", e, |s| s.dictionary.clear()),
        }
    }

    pub fn apply_sample(&mut self, module_id: &str, result: Result<Value>) {
        if self.selected_module.as_deref() != Some(module_id) {
            warn!(module_id, "dropping stale sample response");
            return;
        }
        match result {
            Ok(sample) => self.sample = Some(sample),
            Err(e) => self.degrade("sample", e, |s| s.sample = None),
        }
    }

    pub fn apply_golden_record(&mut self, entity_id: &str, result: Result<GoldenRecord>) {
        if self.selected_entity.as_deref() != Some(entity_id) {
            warn!(entity_id, "dropping stale golden-record response");
            return;
        }
        match result {
            Ok(record) => {
                info!(entity_id, "golden record replaced");
                self.record = Some(record);
            }
            Err(e) => self.degrade("golden record", e, |s| s.record = None),
        }
    }

    pub fn apply_graph(&mut self, entity_id: &str, result: Result<GraphPayload>) {
        if self.selected_entity.as_deref() != Some(entity_id) {
            warn!(entity_id, "dropping stale graph response");
            return;
        }
        let graph = match result {
            Ok(payload) => EntityGraph::from_payload(entity_id, payload),
            Err(e) => {
                let empty = EntityGraph::empty(entity_id);
                self.degrade("graph", e, |_| {});
                empty
            }
        };
        match &mut self.graph_view {
            Some(view) => view.replace_graph(graph),
            None => self.graph_view = Some(GraphView::new(graph)),
        }
    }

    fn degrade(&mut self, resource: &str, error: NexusError, clear: impl FnOnce(&mut Self)) {
        warn!(resource, kind = error.kind(), %error, "fetch degraded to empty slice");
        clear(self);
        self.notices
            .push(format!("Could not load {}: {}", resource, error));
    }

    // -------------------------------------------------------------------------
    // Load: fetch then apply (the three async boundaries)
    // -------------------------------------------------------------------------

    pub async fn load_modules(&mut self, client: &NexusClient) {
        self.apply_modules(client.modules().await);
    }

    pub async fn load_module_slices(&mut self, client: &NexusClient) {
        let Some(module_id) = self.selected_module.clone() else {
            return;
        };
        let dictionary = client.dictionary(&module_id).await;
        self.apply_dictionary(&module_id, dictionary);
        let sample = client.sample(&module_id).await;
        self.apply_sample(&module_id, sample);
    }

    /// Fetch the entity's golden record and graph. The two fetches race in
    /// real deployments; each applies independently.
    pub async fn load_entity_slices(&mut self, client: &NexusClient) {
        let Some(entity_id) = self.selected_entity.clone() else {
            return;
        };
        let (record, graph) = tokio::join!(
            client.golden_record(&entity_id),
            client.graph(&entity_id)
        );
        self.apply_golden_record(&entity_id, record);
        self.apply_graph(&entity_id, graph);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn modules(&self) -> &[ModuleInfo] {
        &self.modules
    }

    pub fn dictionary(&self) -> &[CanonicalRecord] {
        &self.dictionary
    }

    pub fn sample(&self) -> Option<&Value> {
        self.sample.as_ref()
    }

    /// Sample payload pretty-printed verbatim for display
    pub fn sample_pretty(&self) -> Option<String> {
        self.sample
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok())
    }

    pub fn record(&self) -> Option<&GoldenRecord> {
        self.record.as_ref()
    }

    pub fn graph_view(&self) -> Option<&GraphView> {
        self.graph_view.as_ref()
    }

    pub fn graph_view_mut(&mut self) -> Option<&mut GraphView> {
        self.graph_view.as_mut()
    }

    /// Drain accumulated user-visible notices
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph_payload(node_id: &str) -> GraphPayload {
        serde_json::from_value(json!({
            "nodes": [{"id": node_id, "display_name": node_id, "risk_score": 80.0}],
            "edges": []
        }))
        .unwrap()
    }

    #[test]
    fn test_stale_graph_response_is_dropped() {
        let mut session = ViewerSession::new();

        // A is selected and its (slow) fetch is in flight when the analyst
        // moves to B; B's fetch completes first.
        session.select_entity("B");
        session.apply_graph("B", Ok(graph_payload("b-node")));

        // A's response arrives late and must not overwrite B's slice
        session.apply_graph("A", Ok(graph_payload("a-node")));

        let view = session.graph_view().unwrap();
        assert_eq!(view.graph().entity_id, "B");
        assert!(view.graph().has_node("b-node"));
        assert!(!view.graph().has_node("a-node"));
    }

    #[test]
    fn test_replace_leaves_no_residual_nodes() {
        let mut session = ViewerSession::new();
        session.select_entity("A");
        session.apply_graph("A", Ok(graph_payload("a-node")));

        session.select_entity("B");
        session.apply_graph("B", Ok(graph_payload("b-node")));

        let graph = session.graph_view().unwrap().graph();
        assert_eq!(graph.node_count(), 1);
        assert!(graph.has_node("b-node"));
    }

    #[test]
    fn test_record_and_graph_slices_are_independent() {
        let mut session = ViewerSession::new();
        session.select_entity("A");

        // Graph lands first; record slice stays empty
        session.apply_graph("A", Ok(graph_payload("a-node")));
        assert!(session.record().is_none());
        assert!(session.graph_view().is_some());

        // Record failure degrades only the record slice
        session.apply_golden_record(
            "A",
            Err(NexusError::Status {
                resource: "golden record".to_string(),
                status: 502,
            }),
        );
        assert!(session.record().is_none());
        assert!(session.graph_view().unwrap().graph().has_node("a-node"));
        assert_eq!(session.take_notices().len(), 1);
    }

    #[test]
    fn test_failed_graph_fetch_degrades_to_empty_snapshot() {
        let mut session = ViewerSession::new();
        session.select_entity("A");
        session.apply_graph(
            "A",
            Err(NexusError::Status {
                resource: "graph".to_string(),
                status: 500,
            }),
        );

        let graph = session.graph_view().unwrap().graph();
        assert_eq!(graph.entity_id, "A");
        assert_eq!(graph.node_count(), 0);
        assert!(!session.take_notices().is_empty());
    }

    #[test]
    fn test_dictionary_rows_are_resolved_on_apply() {
        let mut session = ViewerSession::new();
        session.select_module("Standard_DB_CompanyInfo");
        session.apply_dictionary(
            "Standard_DB_CompanyInfo",
            Ok(vec![json!({"Field Name": "duns", "Data Type": "string"})]),
        );

        let rows = session.dictionary();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["fieldName"], json!("duns"));
        assert_eq!(rows[0]["type"], json!("string"));
        assert_eq!(rows[0]["description"], json!(""));
    }

    #[test]
    fn test_stale_dictionary_response_is_dropped() {
        let mut session = ViewerSession::new();
        session.select_module("ModuleA");
        session.select_module("ModuleB");
        session.apply_dictionary("ModuleA", Ok(vec![json!({"Field Name": "old"})]));
        assert!(session.dictionary().is_empty());
    }

    #[test]
    fn test_module_categories_are_derived_on_apply() {
        let mut session = ViewerSession::new();
        session.apply_modules(Ok(vec![ModuleInfo {
            id: "Standard_DB_CompanyInfo".to_string(),
            name: "Standard DB CompanyInfo".to_string(),
            has_dictionary: true,
            has_sample: false,
            has_pdf: false,
            category: None,
        }]));
        assert_eq!(
            session.modules()[0].category,
            Some(ModuleCategory::Standard)
        );
    }
}
