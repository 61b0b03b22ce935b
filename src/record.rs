//! Read-only golden-record projection.
//!
//! Turns a [`GoldenRecord`] into display rows: numeric attributes with
//! thousands grouping, absent values as a literal "N/A", and each row carrying
//! its provenance tooltip when lineage exists. No editing surface.

use serde::Serialize;

use crate::lineage::{GoldenRecord, ProvenanceTooltip};

/// Marker rendered for attributes with no value
pub const ABSENT_MARKER: &str = "N/A";

/// One rendered attribute row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow {
    /// Attribute key, matching the lineage map ("revenue_usd", ...)
    pub attribute: String,
    /// Human-readable row label
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<ProvenanceTooltip>,
}

/// Project a golden record into its display rows, in fixed attribute order
pub fn record_rows(record: &GoldenRecord) -> Vec<RecordRow> {
    vec![
        row(record, "name", "Name", text(record.name.as_deref())),
        row(
            record,
            "legal_name",
            "Legal Name",
            text(record.legal_name.as_deref()),
        ),
        row(
            record,
            "revenue_usd",
            "Revenue (USD)",
            record
                .revenue_usd
                .map(format_number)
                .unwrap_or_else(|| ABSENT_MARKER.to_string()),
        ),
        row(
            record,
            "employee_count",
            "Employees",
            record
                .employee_count
                .map(group_thousands)
                .unwrap_or_else(|| ABSENT_MARKER.to_string()),
        ),
        row(
            record,
            "jurisdiction_code",
            "Jurisdiction",
            text(record.jurisdiction_code.as_deref()),
        ),
    ]
}

fn row(record: &GoldenRecord, attribute: &str, label: &str, value: String) -> RecordRow {
    RecordRow {
        attribute: attribute.to_string(),
        label: label.to_string(),
        value,
        tooltip: record.lineage_for(attribute).map(ProvenanceTooltip::from_entry),
    }
}

fn text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => ABSENT_MARKER.to_string(),
    }
}

/// Group an integer's digits in threes: 1234567 -> "1,234,567"
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a numeric attribute with grouped integer digits, keeping a
/// fractional part only when one exists (rounded to two places)
pub fn format_number(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = group_thousands(cents / 100);
    let fraction = (cents % 100).abs();
    if fraction == 0 {
        whole
    } else if cents < 0 && cents / 100 == 0 {
        format!("-{}.{:02}", whole, fraction)
    } else {
        format!("{}.{:02}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineage::LineageEntry;

    fn sample_record() -> GoldenRecord {
        let mut record = GoldenRecord {
            name: Some("Acme Corp".to_string()),
            legal_name: Some("Acme Corporation Ltd".to_string()),
            revenue_usd: Some(12500000.0),
            employee_count: Some(1432),
            jurisdiction_code: Some("GB".to_string()),
            ..Default::default()
        };
        record.lineage_metadata.insert(
            "revenue_usd".to_string(),
            LineageEntry {
                source: "ERP".to_string(),
                payload_id: "abcdefgh1234".to_string(),
                confidence: 0.87,
                file_name: None,
                json_path: None,
            },
        );
        record
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }

    #[test]
    fn test_format_number_fraction() {
        assert_eq!(format_number(12500000.0), "12,500,000");
        assert_eq!(format_number(1234.5), "1,234.50");
    }

    #[test]
    fn test_rows_render_values_and_markers() {
        let rows = record_rows(&sample_record());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].value, "Acme Corp");
        assert_eq!(rows[2].value, "12,500,000");
        assert_eq!(rows[3].value, "1,432");

        let empty = record_rows(&GoldenRecord::default());
        assert!(empty.iter().all(|r| r.value == ABSENT_MARKER));
    }

    #[test]
    fn test_revenue_row_carries_lineage_tooltip() {
        let rows = record_rows(&sample_record());
        let revenue = rows.iter().find(|r| r.attribute == "revenue_usd").unwrap();

        let tooltip = revenue.tooltip.as_ref().unwrap();
        assert_eq!(tooltip.source, "ERP");
        assert_eq!(tooltip.payload_id, "abcdefgh...");
        assert_eq!(tooltip.confidence, "87%");

        // Attributes without lineage hover nothing
        let name = rows.iter().find(|r| r.attribute == "name").unwrap();
        assert!(name.tooltip.is_none());
    }
}
