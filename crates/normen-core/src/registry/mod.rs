//! Norm registry
//!
//! The registry provides:
//! - Loading of known standards (builtin, then user, then project files)
//! - Lookup by canonical identifier
//! - Substring search, category listing and statistics
//!
//! Records are only ever added. Lookups take a shared read guard; `insert`
//! takes the write guard for the existence check and the write, nothing else.

mod builtin;
mod toml_loader;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::RegistryLoadError;
use crate::normalize::StandardIdentifier;
use crate::record::{Category, NormStatus, RegistryRecord};

pub use builtin::builtin_records;
pub use toml_loader::{load_records_from_toml, parse_records};

/// Directory holding registry.toml, both under $HOME and in a project root
pub const CONFIG_DIR: &str = ".normen";
/// Registry seed file name
pub const REGISTRY_FILE: &str = "registry.toml";

/// Aggregate counts over the whole registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatistics {
    pub total: usize,
    pub valid_count: usize,
    pub withdrawn_count: usize,
    pub per_category: BTreeMap<Category, usize>,
}

type Table = IndexMap<StandardIdentifier, RegistryRecord>;

/// In-memory table of known standards, keyed by canonical identifier
#[derive(Debug, Default)]
pub struct NormRegistry {
    table: RwLock<Table>,
}

impl NormRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the builtin standards loaded
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.extend(builtin_records());
        registry
    }

    /// Load standards from standard locations
    ///
    /// Loads in order: builtin, user (~/.normen/registry.toml), project
    /// ({root}/.normen/registry.toml). Records whose key is already present
    /// are skipped, so earlier sources win.
    pub fn load_standard(project_root: Option<&Path>) -> Result<Self, RegistryLoadError> {
        let registry = Self::with_builtins();

        if let Some(home) = dirs::home_dir() {
            let user_file = home.join(CONFIG_DIR).join(REGISTRY_FILE);
            if user_file.exists() {
                registry.load_from_file(&user_file)?;
            }
        }

        if let Some(root) = project_root {
            let project_file = root.join(CONFIG_DIR).join(REGISTRY_FILE);
            if project_file.exists() {
                registry.load_from_file(&project_file)?;
            }
        }

        Ok(registry)
    }

    /// Insert every record from a TOML file, returning how many were new
    pub fn load_from_file(&self, path: &Path) -> Result<usize, RegistryLoadError> {
        let records = load_records_from_toml(path)?;
        let added = self.extend(records);
        tracing::info!("Loaded {} standards from {:?}", added, path);
        Ok(added)
    }

    /// Insert records in order, returning how many were new
    pub fn extend(&self, records: impl IntoIterator<Item = RegistryRecord>) -> usize {
        records
            .into_iter()
            .map(|record| self.insert(record))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Add a new record under its identifier
    ///
    /// Returns `false` and leaves the registry untouched if the key is
    /// already present.
    pub fn insert(&self, record: RegistryRecord) -> bool {
        let id = record.identifier().clone();
        let inserted = {
            let mut table = self.write();
            if table.contains_key(&id) {
                false
            } else {
                table.insert(id.clone(), record);
                true
            }
        };

        if inserted {
            tracing::debug!("Registered standard {}", id);
        } else {
            tracing::warn!("Standard {} already registered, insert rejected", id);
        }
        inserted
    }

    /// Get a record by canonical identifier
    pub fn lookup(&self, id: &StandardIdentifier) -> Option<RegistryRecord> {
        self.read().get(id).cloned()
    }

    /// Case-insensitive substring search over identifier, title and category
    ///
    /// Results keep registry insertion order.
    pub fn search(&self, query: &str) -> Vec<RegistryRecord> {
        let query = query.to_lowercase();
        self.read()
            .values()
            .filter(|record| record.matches_lowercase(&query))
            .cloned()
            .collect()
    }

    /// All records in a category, sorted by identifier
    pub fn by_category(&self, category: Category) -> Vec<RegistryRecord> {
        let mut records: Vec<_> = self
            .read()
            .values()
            .filter(|record| record.category() == category)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.identifier().cmp(b.identifier()));
        records
    }

    /// Aggregate counts, computed in one pass
    pub fn statistics(&self) -> RegistryStatistics {
        let table = self.read();
        let mut stats = RegistryStatistics {
            total: table.len(),
            ..Default::default()
        };

        for record in table.values() {
            *stats.per_category.entry(record.category()).or_insert(0) += 1;
            match record.status() {
                NormStatus::Valid => stats.valid_count += 1,
                NormStatus::Withdrawn => stats.withdrawn_count += 1,
            }
        }

        stats
    }

    /// Snapshot of every record in insertion order
    pub fn records(&self) -> Vec<RegistryRecord> {
        self.read().values().cloned().collect()
    }

    /// Check if a standard exists
    pub fn contains(&self, id: &StandardIdentifier) -> bool {
        self.read().contains_key(id)
    }

    /// Get the number of registered standards
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never leave the table half-updated, so a poisoned guard is
    // still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_identifier;
    use std::sync::Arc;

    fn ids(records: &[RegistryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.identifier().as_str()).collect()
    }

    #[test]
    fn test_empty_registry() {
        let registry = NormRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.statistics(), RegistryStatistics::default());
    }

    #[test]
    fn test_with_builtins() {
        let registry = NormRegistry::with_builtins();
        assert_eq!(registry.len(), 13);
        assert!(registry.contains(&normalize_identifier("DIN 1045")));
        assert!(registry.contains(&normalize_identifier("VOB Teil B")));
    }

    #[test]
    fn test_lookup_empty_identifier() {
        let registry = NormRegistry::with_builtins();
        assert!(registry.lookup(&normalize_identifier("")).is_none());
    }

    #[test]
    fn test_insert_rejects_existing_key() {
        let registry = NormRegistry::with_builtins();
        let clash = RegistryRecord::valid(
            normalize_identifier("DIN 1045"),
            "Replacement title",
            "2024",
            Category::Hochbau,
        );

        assert!(!registry.insert(clash));
        let kept = registry.lookup(&normalize_identifier("DIN 1045")).unwrap();
        assert_eq!(kept.status(), NormStatus::Withdrawn);
        assert_eq!(kept.latest_version(), "2008");
        assert_eq!(registry.len(), 13);
    }

    #[test]
    fn test_insert_new_key() {
        let registry = NormRegistry::with_builtins();
        let record = RegistryRecord::valid(
            normalize_identifier("DIN 4108"),
            "Wärmeschutz",
            "2013",
            Category::Hochbau,
        );

        assert!(registry.insert(record.clone()));
        assert_eq!(registry.lookup(record.identifier()), Some(record));
    }

    #[test]
    fn test_search_insertion_order() {
        let registry = NormRegistry::with_builtins();
        let results = registry.search("vob");
        assert_eq!(ids(&results), vec!["DIN 18300", "VOB Teil A", "VOB Teil B"]);
    }

    #[test]
    fn test_search_case_insensitive_title() {
        let registry = NormRegistry::with_builtins();
        let results = registry.search("SCHALLSCHUTZ");
        assert_eq!(ids(&results), vec!["DIN 4109"]);
    }

    #[test]
    fn test_by_category_sorted() {
        let registry = NormRegistry::with_builtins();
        let hochbau = registry.by_category(Category::Hochbau);
        assert_eq!(ids(&hochbau), vec!["DIN 18008", "DIN 4109", "DIN EN 206"]);
    }

    #[test]
    fn test_statistics() {
        let registry = NormRegistry::with_builtins();
        let stats = registry.statistics();
        assert_eq!(stats.total, 13);
        assert_eq!(stats.valid_count, 12);
        assert_eq!(stats.withdrawn_count, 1);
        assert_eq!(stats.per_category[&Category::Tga], 2);
        assert_eq!(stats.per_category[&Category::Hochbau], 3);
        assert_eq!(stats.per_category.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_concurrent_inserts_single_winner() {
        let registry = Arc::new(NormRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.insert(RegistryRecord::valid(
                        normalize_identifier("DIN 4108"),
                        format!("writer {i}"),
                        "2013",
                        Category::Hochbau,
                    ))
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|inserted| *inserted)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
    }
}
