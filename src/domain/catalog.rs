//! Local item-name catalog loaded from `items.json`.
//!
//! The file is a dump of the Albion item metadata: a JSON array of records
//! carrying an `Index` id and a `LocalizedNames` map. Only the Spanish (or,
//! failing that, English) name is kept; everything else is ignored.

use std::{collections::HashMap, fs, path::Path};

use serde_json::Value;
use thiserror::Error;

use super::entities::{ItemId, CATEGORY_PREFIXES};

/// File expected next to the executable (or in the working directory).
pub const CATALOG_FILE_NAME: &str = "items.json";

const LOCALE_PRIMARY: &str = "ES-ES";
const LOCALE_FALLBACK: &str = "EN-US";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {CATALOG_FILE_NAME}: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse {CATALOG_FILE_NAME}: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Id → display-name mapping, loaded once at startup and immutable afterwards.
///
/// Record order from the file is preserved so that the filtered item list (and
/// therefore request batching) is stable across runs against the same file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    order: Vec<ItemId>,
    names: HashMap<ItemId, String>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let data: Vec<Value> = serde_json::from_str(&raw)?;
        Ok(Self::from_records(&data))
    }

    /// Builds the catalog from parsed records, skipping anything malformed:
    /// non-object entries, entries without an `Index`, entries whose
    /// `LocalizedNames` is not an object, and entries with no usable name.
    pub fn from_records(records: &[Value]) -> Self {
        let mut catalog = Self::default();
        for record in records {
            let Some(object) = record.as_object() else {
                continue;
            };
            let Some(id) = object.get("Index").and_then(Value::as_str) else {
                continue;
            };
            let Some(localized) = object.get("LocalizedNames").and_then(Value::as_object) else {
                continue;
            };
            let name = localized
                .get(LOCALE_PRIMARY)
                .and_then(Value::as_str)
                .or_else(|| localized.get(LOCALE_FALLBACK).and_then(Value::as_str));
            let Some(name) = name else {
                continue;
            };
            catalog.insert(id, display_name(id, name));
        }
        catalog
    }

    fn insert(&mut self, id: &str, name: String) {
        if self.names.insert(id.to_string(), name).is_none() {
            self.order.push(id.to_string());
        }
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name with the raw id as fallback for unknown items.
    pub fn name_or_id(&self, id: &str) -> String {
        self.display_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    /// Ids worth scanning: tier-prefixed (`T...`) ids in one of the tracked
    /// categories, in catalog order. An empty catalog yields an empty list.
    pub fn filtered_items(&self) -> Vec<ItemId> {
        self.order
            .iter()
            .filter(|id| {
                id.starts_with('T') && CATEGORY_PREFIXES.iter().any(|cat| id.contains(cat))
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Appends the tier suffix for tier-prefixed ids: `T4_ORE` → `Mineral T4`.
/// The tier is whatever character sits at position 1 of the id.
fn display_name(id: &str, localized: &str) -> String {
    if id.starts_with('T') && id.contains('_') {
        if let Some(tier) = id.chars().nth(1) {
            return format!("{localized} T{tier}");
        }
    }
    localized.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog_from(value: Value) -> Catalog {
        let records = value.as_array().expect("test records must be an array");
        Catalog::from_records(records)
    }

    #[test]
    fn test_tier_suffix_appended() {
        let catalog = catalog_from(json!([
            {"Index": "T4_ORE", "LocalizedNames": {"ES-ES": "Mineral"}},
            {"Index": "T8_PLANK", "LocalizedNames": {"ES-ES": "Tablón"}},
        ]));
        assert_eq!(catalog.display_name("T4_ORE"), Some("Mineral T4"));
        assert_eq!(catalog.display_name("T8_PLANK"), Some("Tablón T8"));
    }

    #[test]
    fn test_no_suffix_without_underscore_or_t_prefix() {
        let catalog = catalog_from(json!([
            {"Index": "TREASURE", "LocalizedNames": {"ES-ES": "Tesoro"}},
            {"Index": "UNIQUE_ITEM", "LocalizedNames": {"ES-ES": "Único"}},
        ]));
        assert_eq!(catalog.display_name("TREASURE"), Some("Tesoro"));
        assert_eq!(catalog.display_name("UNIQUE_ITEM"), Some("Único"));
    }

    #[test]
    fn test_locale_fallback_to_english() {
        let catalog = catalog_from(json!([
            {"Index": "T4_ORE", "LocalizedNames": {"EN-US": "Ore"}},
        ]));
        assert_eq!(catalog.display_name("T4_ORE"), Some("Ore T4"));
    }

    #[test]
    fn test_malformed_records_skipped() {
        let catalog = catalog_from(json!([
            42,
            {"LocalizedNames": {"ES-ES": "Sin índice"}},
            {"Index": "T4_BAD", "LocalizedNames": "not a map"},
            {"Index": "T4_UNNAMED", "LocalizedNames": {"DE-DE": "Erz"}},
            {"Index": "T4_ORE", "LocalizedNames": {"ES-ES": "Mineral"}},
        ]));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.display_name("T4_ORE"), Some("Mineral T4"));
    }

    #[test]
    fn test_filter_requires_category_and_tier_prefix() {
        let catalog = catalog_from(json!([
            {"Index": "T4_ORE", "LocalizedNames": {"ES-ES": "Mineral"}},
            {"Index": "T5_WOOD", "LocalizedNames": {"ES-ES": "Madera"}},
            {"Index": "UNIQUE_MOUNT_COUGAR", "LocalizedNames": {"ES-ES": "Puma"}},
            {"Index": "T4_SWORD", "LocalizedNames": {"ES-ES": "Espada"}},
        ]));
        assert_eq!(catalog.filtered_items(), vec!["T4_ORE", "T5_WOOD"]);
    }

    #[test]
    fn test_filter_preserves_file_order() {
        let catalog = catalog_from(json!([
            {"Index": "T5_WOOD", "LocalizedNames": {"ES-ES": "Madera"}},
            {"Index": "T4_ORE", "LocalizedNames": {"ES-ES": "Mineral"}},
            {"Index": "T3_HIDE", "LocalizedNames": {"ES-ES": "Piel"}},
        ]));
        assert_eq!(catalog.filtered_items(), vec!["T5_WOOD", "T4_ORE", "T3_HIDE"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_filter() {
        let catalog = Catalog::default();
        assert!(catalog.filtered_items().is_empty());
    }

    #[test]
    fn test_name_or_id_falls_back_to_raw_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.name_or_id("T4_ORE"), "T4_ORE");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/items.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_load_corrupt_file_is_parse_error() {
        let path = std::env::temp_dir().join("albion_scanner_corrupt_items.json");
        fs::write(&path, "this is not json").expect("write temp file");
        let err = Catalog::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
