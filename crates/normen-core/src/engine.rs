//! Entry points used by the request-handling and norms-lookup layers

use std::path::Path;
use std::sync::Arc;

use crate::citation::{AnnotatedCitation, RawCitation};
use crate::error::RegistryLoadError;
use crate::extractors;
use crate::record::{Category, RegistryRecord};
use crate::registry::{NormRegistry, RegistryStatistics};
use crate::verification::{self, Actuality, StandardLookup};

/// Citation extraction and verification bound to one registry
///
/// Cheap to clone; clones share the registry.
#[derive(Debug, Clone)]
pub struct NormEngine {
    registry: Arc<NormRegistry>,
}

impl Default for NormEngine {
    fn default() -> Self {
        Self::new(Arc::new(NormRegistry::with_builtins()))
    }
}

impl NormEngine {
    pub fn new(registry: Arc<NormRegistry>) -> Self {
        Self { registry }
    }

    /// Create with the registry loaded from standard locations
    ///
    /// A broken user or project file is logged and the builtin table is
    /// used instead.
    pub fn with_project_root(project_root: Option<&Path>) -> Self {
        let registry = NormRegistry::load_standard(project_root).unwrap_or_else(|e| {
            tracing::warn!("Failed to load registry files: {}, using builtins only", e);
            NormRegistry::with_builtins()
        });
        Self::new(Arc::new(registry))
    }

    pub fn registry(&self) -> &Arc<NormRegistry> {
        &self.registry
    }

    pub fn extract_citations(&self, text: &str) -> Vec<RawCitation> {
        extractors::extract_citations(text)
    }

    pub fn verify(&self, citations: &[RawCitation]) -> Vec<AnnotatedCitation> {
        verification::verify(&self.registry, citations)
    }

    /// Extract and verify in one step
    pub fn process(&self, text: &str) -> Vec<AnnotatedCitation> {
        self.verify(&self.extract_citations(text))
    }

    pub fn lookup_standard(&self, raw_identifier: &str) -> StandardLookup {
        verification::lookup_standard(&self.registry, raw_identifier)
    }

    pub fn search_standards(&self, query: &str) -> Vec<RegistryRecord> {
        self.registry.search(query)
    }

    pub fn standards_by_category(&self, category: Category) -> Vec<RegistryRecord> {
        self.registry.by_category(category)
    }

    pub fn registry_statistics(&self) -> RegistryStatistics {
        self.registry.statistics()
    }

    pub fn check_actuality(&self, raw_identifier: &str, year: &str) -> Actuality {
        verification::check_actuality(&self.registry, raw_identifier, year)
    }

    /// Administrative insert; `false` if the standard is already known
    pub fn insert_standard(&self, record: RegistryRecord) -> bool {
        let inserted = self.registry.insert(record);
        if inserted {
            tracing::info!("Registry now holds {} standards", self.registry.len());
        }
        inserted
    }

    /// Add the standards from a TOML file, returning how many were new
    pub fn load_standards(&self, path: &Path) -> Result<usize, RegistryLoadError> {
        self.registry.load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_identifier;
    use crate::record::NormStatus;

    #[test]
    fn test_process() {
        let engine = NormEngine::default();
        let annotated = engine.process("Bemessung nach DIN 1045:2008, heute EN 1992-1-1.");
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].status(), Some(NormStatus::Withdrawn));
        assert!(!annotated[1].verified());
    }

    #[test]
    fn test_clones_share_registry() {
        let engine = NormEngine::default();
        let other = engine.clone();
        let record = RegistryRecord::valid(
            normalize_identifier("DIN 4108"),
            "Wärmeschutz",
            "2013",
            Category::Hochbau,
        );

        assert!(other.insert_standard(record.clone()));
        assert!(engine.lookup_standard("DIN 4108").citation().verified());
        assert!(!engine.insert_standard(record));
    }

    #[test]
    fn test_fixture_registry() {
        let registry = NormRegistry::new();
        registry.insert(RegistryRecord::valid(
            normalize_identifier("VDI 2035"),
            "Vermeidung von Schäden in Warmwasser-Heizungsanlagen",
            "2021",
            Category::Tga,
        ));
        let engine = NormEngine::new(Arc::new(registry));

        assert!(engine.lookup_standard("VDI 2035").citation().verified());
        assert!(!engine.lookup_standard("DIN 1045").citation().verified());
        assert_eq!(engine.registry_statistics().total, 1);
    }
}
