//! Reference-module metadata.
//!
//! A module is one upstream data product (dictionary + optional sample
//! payload + optional PDF). The listing is what the sidebar renders; the
//! category is derived from the module id prefix.

use serde::{Deserialize, Serialize};

/// Module category derived from the id prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleCategory {
    Standard,
    Additional,
    Side,
    AddOn,
    Unknown,
}

impl ModuleCategory {
    pub fn from_module_id(id: &str) -> Self {
        if id.starts_with("Standard_DB_") {
            ModuleCategory::Standard
        } else if id.starts_with("Additional_DB_") {
            ModuleCategory::Additional
        } else if id.starts_with("Side_DB_") {
            ModuleCategory::Side
        } else if id.starts_with("addon_") || id.starts_with("Addon_") {
            ModuleCategory::AddOn
        } else {
            ModuleCategory::Unknown
        }
    }
}

/// One entry of `GET /references/modules`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub id: String,
    pub name: String,
    pub has_dictionary: bool,
    pub has_sample: bool,
    pub has_pdf: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ModuleCategory>,
}

impl ModuleInfo {
    /// Human-readable(ish) name: underscores become spaces
    pub fn display_name(id: &str) -> String {
        id.replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_prefix() {
        assert_eq!(
            ModuleCategory::from_module_id("Standard_DB_CompanyInfo"),
            ModuleCategory::Standard
        );
        assert_eq!(
            ModuleCategory::from_module_id("Additional_DB_Hierarchies"),
            ModuleCategory::Additional
        );
        assert_eq!(
            ModuleCategory::from_module_id("Side_DB_Extra"),
            ModuleCategory::Side
        );
        assert_eq!(
            ModuleCategory::from_module_id("addon_esg"),
            ModuleCategory::AddOn
        );
        assert_eq!(
            ModuleCategory::from_module_id("something_else"),
            ModuleCategory::Unknown
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            ModuleInfo::display_name("Standard_DB_CompanyInfo"),
            "Standard DB CompanyInfo"
        );
    }
}
