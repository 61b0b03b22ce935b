//! Total, order-sensitive resolution of raw records onto canonical shapes.

use serde_json::{Map, Value};

use super::fields::AliasTable;

/// Canonical record keyed by the alias table's wire keys
pub type CanonicalRecord = Map<String, Value>;

/// Resolve a raw record against an ordered alias table.
///
/// For each canonical field the first alias key *present* in the raw record
/// wins; presence is key presence, not truthiness, so empty strings and nulls
/// are taken as-is. Values are copied verbatim (no trimming or case folding).
/// A raw record that is not a JSON object yields the fully-default canonical
/// record. Resolution never fails and is idempotent for a fixed table.
pub fn resolve(raw: &Value, table: &AliasTable) -> CanonicalRecord {
    let obj = raw.as_object();
    let mut out = Map::with_capacity(table.rules().len());
    for rule in table.rules() {
        let hit = obj.and_then(|o| rule.aliases.iter().find_map(|alias| o.get(alias.as_str())));
        out.insert(
            rule.key.to_string(),
            hit.cloned().unwrap_or_else(|| rule.default.value()),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dictionary_row_resolution() {
        let raw = json!({"Field Name": "X", "Data Type": "T"});
        let record = resolve(&raw, &AliasTable::dictionary());

        assert_eq!(record["fieldName"], json!("X"));
        assert_eq!(record["type"], json!("T"));
        assert_eq!(record["description"], json!(""));
        assert_eq!(record["dnbCode"], json!(""));
        assert_eq!(record["length"], json!(""));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = AliasTable::dictionary();
        let raw = json!({"Data Name": "duns", "Definition": "identifier", "Length": 9});
        assert_eq!(resolve(&raw, &table), resolve(&raw, &table));
    }

    #[test]
    fn test_first_alias_wins() {
        let table = AliasTable::dictionary();
        // Both aliases present: "Field Name" is declared before "Data Name"
        let raw = json!({"Data Name": "second", "Field Name": "first"});
        assert_eq!(resolve(&raw, &table)["fieldName"], json!("first"));
    }

    #[test]
    fn test_presence_beats_truthiness() {
        let table = AliasTable::dictionary();
        // An empty string under the first alias still wins over the second
        let raw = json!({"Field Name": "", "Data Name": "fallback"});
        assert_eq!(resolve(&raw, &table)["fieldName"], json!(""));
    }

    #[test]
    fn test_empty_record_yields_all_defaults() {
        let record = resolve(&json!({}), &AliasTable::dictionary());
        assert_eq!(record.len(), 5);
        for (_, value) in &record {
            assert_eq!(value, &json!(""));
        }
    }

    #[test]
    fn test_non_object_input_yields_defaults() {
        for raw in [json!(null), json!("not a row"), json!([1, 2, 3]), json!(42)] {
            let record = resolve(&raw, &AliasTable::entity());
            assert_eq!(record.len(), 5);
            for (_, value) in &record {
                assert_eq!(value, &Value::Null);
            }
        }
    }

    #[test]
    fn test_entity_defaults_are_null() {
        let record = resolve(&json!({"name": "Acme"}), &AliasTable::entity());
        assert_eq!(record["name"], json!("Acme"));
        assert_eq!(record["legalName"], Value::Null);
        assert_eq!(record["revenueUsd"], Value::Null);
    }
}
