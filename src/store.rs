//! File-backed stores for the reference server.
//!
//! `ReferenceStore` scans a references directory for
//! `<module>_Dictionary.json` / `<module>_Sample.json` / `<module>_PDF.pdf`
//! files and serves module listings, dictionary rows, and samples from them.
//! `EntityStore` holds golden records and graph snapshots seeded from one
//! JSON file. Both are lenient the way the upstream viewer expects: a missing
//! or unparseable file narrows to an empty result, not an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::graph::GraphPayload;
use crate::lineage::GoldenRecord;
use crate::reference::{ModuleCategory, ModuleInfo};

const DICTIONARY_SUFFIX: &str = "_Dictionary.json";
const SAMPLE_SUFFIX: &str = "_Sample.json";
const PDF_SUFFIX: &str = "_PDF.pdf";

/// Reference-data modules served from a directory of JSON files
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    base_dir: PathBuf,
}

impl ReferenceStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// List available modules. A module exists iff its dictionary file does;
    /// sample/PDF presence becomes capability flags.
    pub fn modules(&self) -> Vec<ModuleInfo> {
        let entries = match std::fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.base_dir.display(), %e, "references directory unreadable");
                return Vec::new();
            }
        };

        let mut modules: Vec<ModuleInfo> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_name = entry.file_name().into_string().ok()?;
                let module_id = file_name.strip_suffix(DICTIONARY_SUFFIX)?.to_string();
                Some(ModuleInfo {
                    name: ModuleInfo::display_name(&module_id),
                    has_dictionary: true,
                    has_sample: self
                        .base_dir
                        .join(format!("{}{}", module_id, SAMPLE_SUFFIX))
                        .exists(),
                    has_pdf: self
                        .base_dir
                        .join(format!("{}{}", module_id, PDF_SUFFIX))
                        .exists(),
                    category: Some(ModuleCategory::from_module_id(&module_id)),
                    id: module_id,
                })
            })
            .collect();

        modules.sort_by(|a, b| a.id.cmp(&b.id));
        modules
    }

    /// Dictionary rows for a module; empty on any miss or parse failure
    pub fn dictionary(&self, module_id: &str) -> Vec<Value> {
        let Some(path) = self.module_file(module_id, DICTIONARY_SUFFIX) else {
            return Vec::new();
        };
        match read_json(&path) {
            Some(Value::Array(rows)) => rows,
            Some(_) => {
                warn!(module_id, "dictionary file is not a JSON array");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Sample payload for a module, if one exists and parses
    pub fn sample(&self, module_id: &str) -> Option<Value> {
        let path = self.module_file(module_id, SAMPLE_SUFFIX)?;
        read_json(&path)
    }

    /// Resolve a module file path, refusing ids that escape the base dir
    fn module_file(&self, module_id: &str, suffix: &str) -> Option<PathBuf> {
        if module_id.is_empty() || module_id.contains(['/', '\\']) || module_id.contains("..") {
            warn!(module_id, "rejecting module id");
            return None;
        }
        let path = self.base_dir.join(format!("{}{}", module_id, suffix));
        path.exists().then_some(path)
    }
}

fn read_json(path: &Path) -> Option<Value> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), %e, "failed to read reference file");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), %e, "failed to parse reference file");
            None
        }
    }
}

/// Wire shape of the entity seed file
#[derive(Debug, Default, Deserialize)]
struct EntitySeed {
    #[serde(default)]
    entities: HashMap<String, GoldenRecord>,
    #[serde(default)]
    graphs: HashMap<String, GraphPayload>,
}

/// Golden records and graph snapshots seeded from one JSON file.
///
/// Stands in for the Postgres/Neo4j stores of a full deployment; entity
/// resolution itself happens upstream and this store only serves its output.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: HashMap<String, GoldenRecord>,
    graphs: HashMap<String, GraphPayload>,
}

impl EntityStore {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let seed: EntitySeed = serde_json::from_slice(&bytes)?;
        Ok(Self {
            entities: seed.entities,
            graphs: seed.graphs,
        })
    }

    pub fn golden_record(&self, entity_id: &str) -> Option<&GoldenRecord> {
        self.entities.get(entity_id)
    }

    /// Graph neighborhood for an entity; an unknown entity has an empty one
    pub fn graph(&self, entity_id: &str) -> GraphPayload {
        self.graphs.get(entity_id).cloned().unwrap_or_default()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seed_references(dir: &Path) {
        fs::write(
            dir.join("Standard_DB_CompanyInfo_Dictionary.json"),
            r#"[{"Field Name": "duns", "Data Type": "string"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("Standard_DB_CompanyInfo_Sample.json"),
            r#"{"organization": {"duns": "123456789"}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("addon_esg_Dictionary.json"),
            r#"not valid json"#,
        )
        .unwrap();
    }

    #[test]
    fn test_module_scan_sets_capability_flags() {
        let dir = tempfile::tempdir().unwrap();
        seed_references(dir.path());

        let store = ReferenceStore::new(dir.path());
        let modules = store.modules();
        assert_eq!(modules.len(), 2);

        let company = modules
            .iter()
            .find(|m| m.id == "Standard_DB_CompanyInfo")
            .unwrap();
        assert!(company.has_dictionary);
        assert!(company.has_sample);
        assert!(!company.has_pdf);
        assert_eq!(company.category, Some(ModuleCategory::Standard));

        let esg = modules.iter().find(|m| m.id == "addon_esg").unwrap();
        assert!(!esg.has_sample);
        assert_eq!(esg.category, Some(ModuleCategory::AddOn));
    }

    #[test]
    fn test_unparseable_dictionary_narrows_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        seed_references(dir.path());

        let store = ReferenceStore::new(dir.path());
        assert!(store.dictionary("addon_esg").is_empty());
        assert!(store.dictionary("no_such_module").is_empty());
        assert_eq!(store.dictionary("Standard_DB_CompanyInfo").len(), 1);
    }

    #[test]
    fn test_traversal_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReferenceStore::new(dir.path());
        assert!(store.dictionary("../etc/passwd").is_empty());
        assert!(store.sample("a/b").is_none());
    }

    #[test]
    fn test_missing_references_dir_yields_empty_listing() {
        let store = ReferenceStore::new("/nonexistent/references");
        assert!(store.modules().is_empty());
    }

    #[test]
    fn test_entity_store_seed_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("entities.json");
        fs::write(
            &seed_path,
            r#"{
                "entities": {
                    "E-1": {"name": "Acme", "lineage_metadata": {}}
                },
                "graphs": {
                    "E-1": {"nodes": [{"id": "n1", "display_name": "Acme"}], "edges": []}
                }
            }"#,
        )
        .unwrap();

        let store = EntityStore::from_file(&seed_path).unwrap();
        assert_eq!(store.entity_count(), 1);
        assert_eq!(
            store.golden_record("E-1").unwrap().name.as_deref(),
            Some("Acme")
        );
        assert_eq!(store.graph("E-1").nodes.len(), 1);
        assert!(store.graph("E-404").nodes.is_empty());
    }
}
