//! Static display-metadata tables for the web UI's table views
//! -----------------------------------------------------------
//! Holds the column-header schemas, the data type catalog and the
//! type-to-encoding map consumed by the rendering layer. The data is
//! declared once at compile time and never mutated; consumers receive a
//! `TableConfig` by explicit injection, or look one up by name through
//! the [`registry`] module.

pub mod registry;

mod builtin;

#[cfg(test)]
mod registry_tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, AppResult};

/// Compile-time header declaration; materialized into owned [`HeaderItem`]s
/// when a config is built.
#[derive(Clone, Copy, Debug)]
pub struct HeaderItemDef {
    pub attr: &'static str,
    pub name: &'static str,
}

/// One renderable table column: `attr` is the field key the templating
/// layer reads from row objects, `name` the human-readable column label.
/// The serialized field names are a wire contract; do not rename.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderItem {
    pub attr: String,
    pub name: String,
}

impl From<HeaderItemDef> for HeaderItem {
    fn from(d: HeaderItemDef) -> Self {
        Self { attr: d.attr.to_string(), name: d.name.to_string() }
    }
}

/// Immutable bundle of the four lookup tables. Order is significant in
/// every table: header lists render left-to-right as declared, the data
/// type catalog fills a selector top-to-bottom, and encoding lists keep
/// their declared precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    header_items: Vec<HeaderItem>,
    data_types: Vec<String>,
    encoding_map: Vec<(String, Vec<String>)>,
    snapshot_header_items: Vec<HeaderItem>,
}

impl TableConfig {
    pub fn new(
        header_items: Vec<HeaderItem>,
        data_types: Vec<String>,
        encoding_map: Vec<(String, Vec<String>)>,
        snapshot_header_items: Vec<HeaderItem>,
    ) -> Self {
        Self { header_items, data_types, encoding_map, snapshot_header_items }
    }

    /// The built-in tables compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            header_items: builtin::HEADER_ITEMS.iter().copied().map(HeaderItem::from).collect(),
            data_types: builtin::DATA_TYPES.iter().map(|s| s.to_string()).collect(),
            encoding_map: builtin::ENCODING_MAP
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
            snapshot_header_items: builtin::SNAPSHOT_HEADER_ITEMS
                .iter()
                .copied()
                .map(HeaderItem::from)
                .collect(),
        }
    }

    /// Header schema of the generic column-metadata table.
    pub fn header_items(&self) -> &[HeaderItem] { &self.header_items }

    /// Recognized column data types, declaration order preserved.
    pub fn data_types(&self) -> &[String] { &self.data_types }

    /// Header schema of the snapshot-metadata table.
    pub fn snapshot_header_items(&self) -> &[HeaderItem] { &self.snapshot_header_items }

    /// All (source type, encodings) entries in declaration order.
    pub fn encoding_entries(&self) -> &[(String, Vec<String>)] { &self.encoding_map }

    /// Permitted encoding strategies for a source column type. Keys are
    /// case-sensitive; an unknown type yields `None`, which consumers
    /// treat as "no encoding options to offer".
    pub fn encoding_options(&self, type_name: &str) -> Option<&[String]> {
        self.encoding_map
            .iter()
            .find(|(k, _)| k == type_name)
            .map(|(_, v)| v.as_slice())
    }

    /// Check the structural invariants the rendering layer relies on.
    /// The built-in tables always pass; this guards configs substituted
    /// by tests or application wiring.
    pub fn validate(&self) -> AppResult<()> {
        let res = self.validate_inner();
        if let Err(ref e) = res {
            warn!(error = %e, "table config rejected");
        }
        res
    }

    fn validate_inner(&self) -> AppResult<()> {
        check_header_list(&self.header_items, "header")?;
        check_header_list(&self.snapshot_header_items, "snapshot header")?;

        let mut seen: HashSet<&str> = HashSet::new();
        for dt in &self.data_types {
            if dt.is_empty() {
                return Err(AppError::user("empty_data_type", "data type catalog contains an empty name"));
            }
            if !seen.insert(dt.as_str()) {
                return Err(AppError::user("duplicate_data_type", format!("data type '{dt}' declared twice")));
            }
        }

        let mut keys: HashSet<&str> = HashSet::new();
        for (ty, encodings) in &self.encoding_map {
            if ty.is_empty() {
                return Err(AppError::user("empty_type_key", "encoding map contains an empty type key"));
            }
            if !keys.insert(ty.as_str()) {
                return Err(AppError::user("duplicate_type_key", format!("encoding map key '{ty}' declared twice")));
            }
            if encodings.is_empty() {
                return Err(AppError::user("empty_encoding_list", format!("type '{ty}' maps to no encodings")));
            }
            if encodings.iter().any(|e| e.is_empty()) {
                return Err(AppError::user("empty_encoding_name", format!("type '{ty}' maps to an empty encoding name")));
            }
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self { Self::builtin() }
}

fn check_header_list(items: &[HeaderItem], which: &str) -> AppResult<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for item in items {
        if item.attr.is_empty() {
            return Err(AppError::user("empty_attr", format!("{which} list contains an empty attr")));
        }
        if !seen.insert(item.attr.as_str()) {
            return Err(AppError::user("duplicate_attr", format!("{which} attr '{}' declared twice", item.attr)));
        }
    }
    Ok(())
}
