//! Schema resolution for heterogeneously-keyed upstream records.
//!
//! Upstream data dictionaries and entity payloads name the same attribute in
//! many ways ("Field Name", "Data Name", ...). This module maps a raw record
//! onto a fixed canonical shape using declared, ordered alias tables instead
//! of scattered per-key fallback chains.

pub mod fields;
pub mod resolver;

pub use fields::{AliasRule, AliasTable, FieldDefault};
pub use resolver::{resolve, CanonicalRecord};
