//! Canonical field definitions and default alias tables.
//!
//! Two canonical domains exist: dictionary rows (field definitions from a
//! module's data dictionary) and entity golden-record attributes. Each
//! canonical field carries an ordered alias list; earlier aliases win.

use serde_json::Value;

/// Default taken when none of a field's aliases are present in the raw record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Empty string (dictionary fields are always rendered, so never null)
    Empty,
    /// JSON null (entity fields render an explicit N/A marker downstream)
    Absent,
}

impl FieldDefault {
    pub fn value(&self) -> Value {
        match self {
            FieldDefault::Empty => Value::String(String::new()),
            FieldDefault::Absent => Value::Null,
        }
    }
}

/// One canonical field: its wire key, ordered aliases, and default
#[derive(Debug, Clone)]
pub struct AliasRule {
    pub key: &'static str,
    pub aliases: Vec<String>,
    pub default: FieldDefault,
}

impl AliasRule {
    pub fn new(key: &'static str, aliases: &[&str], default: FieldDefault) -> Self {
        Self {
            key,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            default,
        }
    }
}

/// Ordered alias table for one canonical domain.
///
/// Order matters twice: rules fix the canonical record's key order, and each
/// rule's alias list fixes resolution priority.
#[derive(Debug, Clone)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl Default for AliasTable {
    fn default() -> Self {
        AliasTable::dictionary()
    }
}

impl AliasTable {
    pub fn new(rules: Vec<AliasRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Canonical shape for module data-dictionary rows.
    ///
    /// Aliases cover the column headings seen across D&B dictionary sheets
    /// (default sheet and the richer "Business Dictionary" sheet).
    pub fn dictionary() -> Self {
        Self::new(vec![
            AliasRule::new(
                "fieldName",
                &["Field Name", "Data Name", "Attribute Name", "Field", "name"],
                FieldDefault::Empty,
            ),
            AliasRule::new(
                "description",
                &[
                    "Description",
                    "Data Definition",
                    "Definition",
                    "Field Description",
                ],
                FieldDefault::Empty,
            ),
            AliasRule::new(
                "dnbCode",
                &["DNB Code", "D&B Code", "Element ID", "Code"],
                FieldDefault::Empty,
            ),
            AliasRule::new("type", &["Data Type", "Type", "Format"], FieldDefault::Empty),
            AliasRule::new(
                "length",
                &["Length", "Max Length", "Field Length"],
                FieldDefault::Empty,
            ),
        ])
    }

    /// Canonical shape for entity golden-record attributes
    pub fn entity() -> Self {
        Self::new(vec![
            AliasRule::new(
                "name",
                &["name", "primary_name", "business_name"],
                FieldDefault::Absent,
            ),
            AliasRule::new(
                "legalName",
                &["legal_name", "registered_name", "legalName"],
                FieldDefault::Absent,
            ),
            AliasRule::new(
                "revenueUsd",
                &["revenue_usd", "yearly_revenue_usd", "annual_revenue"],
                FieldDefault::Absent,
            ),
            AliasRule::new(
                "employeeCount",
                &["employee_count", "employees_total", "headcount"],
                FieldDefault::Absent,
            ),
            AliasRule::new(
                "jurisdictionCode",
                &["jurisdiction_code", "country_code", "iso_country"],
                FieldDefault::Absent,
            ),
        ])
    }
}
