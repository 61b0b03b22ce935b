//! Golden-record and lineage models.
//!
//! A golden record is the consolidated attribute set for one resolved entity.
//! Every attribute may carry a lineage entry recording which upstream source,
//! payload, and confidence produced its value. The whole structure is created
//! once per fetch and replaced wholesale on re-fetch; nothing here mutates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Provenance of one canonical attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEntry {
    /// Source system that contributed the value (e.g. "ERP", "DNB")
    pub source: String,
    /// Identifier of the originating payload; non-empty by contract
    pub payload_id: String,
    /// Resolution confidence in [0, 1]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,
}

/// Consolidated golden record for one entity, with per-attribute lineage.
///
/// All attributes are optional: a shape-mismatched upstream response
/// deserializes to a default-filled record rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoldenRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction_code: Option<String>,
    /// Lineage keyed by attribute name ("revenue_usd", "legal_name", ...)
    #[serde(default)]
    pub lineage_metadata: HashMap<String, LineageEntry>,
}

impl GoldenRecord {
    /// Read-only lineage lookup for one attribute
    pub fn lineage_for(&self, attribute: &str) -> Option<&LineageEntry> {
        self.lineage_metadata.get(attribute)
    }
}

/// Number of payload-id characters shown before the ellipsis
const PAYLOAD_ID_PREFIX: usize = 8;

/// Pre-formatted hover tooltip for one attribute's provenance.
///
/// Purely presentational: built from an already-fetched [`LineageEntry`],
/// never from a network call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvenanceTooltip {
    pub source: String,
    /// Payload id truncated to its first 8 characters plus "..."
    pub payload_id: String,
    /// Confidence as a whole-number percentage, e.g. "87%"
    pub confidence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,
}

impl ProvenanceTooltip {
    pub fn from_entry(entry: &LineageEntry) -> Self {
        Self {
            source: entry.source.clone(),
            payload_id: truncate_payload_id(&entry.payload_id),
            confidence: format!("{}%", (entry.confidence * 100.0).round() as i64),
            file_name: entry.file_name.clone(),
            json_path: entry.json_path.clone(),
        }
    }

    /// Tooltip body as display lines; file/path lines only when present
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Source: {}", self.source),
            format!("Payload: {}", self.payload_id),
            format!("Confidence: {}", self.confidence),
        ];
        if let Some(file) = &self.file_name {
            lines.push(format!("File: {}", file));
        }
        if let Some(path) = &self.json_path {
            lines.push(format!("Path: {}", path));
        }
        lines
    }
}

fn truncate_payload_id(id: &str) -> String {
    if id.chars().count() > PAYLOAD_ID_PREFIX {
        let prefix: String = id.chars().take(PAYLOAD_ID_PREFIX).collect();
        format!("{}...", prefix)
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn erp_entry() -> LineageEntry {
        LineageEntry {
            source: "ERP".to_string(),
            payload_id: "abcdefgh1234".to_string(),
            confidence: 0.87,
            file_name: None,
            json_path: None,
        }
    }

    #[test]
    fn test_tooltip_truncates_and_rounds() {
        let tooltip = ProvenanceTooltip::from_entry(&erp_entry());
        assert_eq!(tooltip.source, "ERP");
        assert_eq!(tooltip.payload_id, "abcdefgh...");
        assert_eq!(tooltip.confidence, "87%");
        assert_eq!(tooltip.file_name, None);
        assert_eq!(tooltip.json_path, None);
    }

    #[test]
    fn test_tooltip_omits_absent_locator_lines() {
        let lines = ProvenanceTooltip::from_entry(&erp_entry()).lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.starts_with("File:")));
        assert!(lines.iter().all(|l| !l.starts_with("Path:")));
    }

    #[test]
    fn test_tooltip_includes_locators_when_present() {
        let mut entry = erp_entry();
        entry.file_name = Some("batch_0412.json".to_string());
        entry.json_path = Some("$.organization.financials".to_string());

        let lines = ProvenanceTooltip::from_entry(&entry).lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "File: batch_0412.json");
        assert_eq!(lines[4], "Path: $.organization.financials");
    }

    #[test]
    fn test_short_payload_id_shown_whole() {
        let mut entry = erp_entry();
        entry.payload_id = "ab12".to_string();
        let tooltip = ProvenanceTooltip::from_entry(&entry);
        assert_eq!(tooltip.payload_id, "ab12");
    }

    #[test]
    fn test_confidence_rounds_to_nearest_whole() {
        let mut entry = erp_entry();
        entry.confidence = 0.005;
        assert_eq!(ProvenanceTooltip::from_entry(&entry).confidence, "1%");
        entry.confidence = 1.0;
        assert_eq!(ProvenanceTooltip::from_entry(&entry).confidence, "100%");
    }

    #[test]
    fn test_golden_record_deserializes_with_missing_keys() {
        let record: GoldenRecord = serde_json::from_str(r#"{"name": "Acme Corp"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Acme Corp"));
        assert_eq!(record.revenue_usd, None);
        assert!(record.lineage_metadata.is_empty());
        assert!(record.lineage_for("revenue_usd").is_none());
    }
}
