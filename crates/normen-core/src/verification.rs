//! Verification of citations against the registry
//!
//! A pure join: every citation is normalized, looked up, and rebuilt as an
//! [`AnnotatedCitation`]. Unknown standards are reported through the warning
//! text, never as an error.

use serde::Serialize;

use crate::citation::{AnnotatedCitation, RawCitation};
use crate::normalize::normalize_identifier;
use crate::record::{NormStatus, RegistryRecord};
use crate::registry::NormRegistry;

/// Warning attached to citations the registry does not know
pub const NOT_FOUND_WARNING: &str = "standard not found in registry, check spelling";

/// Warning attached to withdrawn standards
pub fn withdrawn_warning(record: &RegistryRecord) -> String {
    match record.replaced_by() {
        Some(successor) => format!("withdrawn, superseded by {}", successor),
        None => "withdrawn".to_string(),
    }
}

/// Annotate one citation
pub fn verify_citation(registry: &NormRegistry, citation: &RawCitation) -> AnnotatedCitation {
    let id = normalize_identifier(citation.identifier().as_str());
    annotate(citation, registry.lookup(&id).as_ref())
}

fn annotate(citation: &RawCitation, record: Option<&RegistryRecord>) -> AnnotatedCitation {
    match record {
        None => AnnotatedCitation::from_parts(
            citation,
            false,
            None,
            Some(NOT_FOUND_WARNING.to_string()),
        ),
        Some(record) => match record.status() {
            NormStatus::Valid => {
                AnnotatedCitation::from_parts(citation, true, Some(NormStatus::Valid), None)
            }
            NormStatus::Withdrawn => AnnotatedCitation::from_parts(
                citation,
                true,
                Some(NormStatus::Withdrawn),
                Some(withdrawn_warning(record)),
            ),
        },
    }
}

/// Annotate every citation, keeping length and order
pub fn verify(registry: &NormRegistry, citations: &[RawCitation]) -> Vec<AnnotatedCitation> {
    let annotated: Vec<_> = citations
        .iter()
        .map(|c| verify_citation(registry, c))
        .collect();
    tracing::debug!(
        "Verified {} citations, {} unknown",
        annotated.len(),
        annotated.iter().filter(|c| !c.verified()).count()
    );
    annotated
}

/// Result of looking up a single identifier
///
/// Serializes as the annotated citation's fields plus a `record` object
/// holding the registry entry, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardLookup {
    #[serde(flatten)]
    citation: AnnotatedCitation,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<RegistryRecord>,
}

impl StandardLookup {
    pub fn citation(&self) -> &AnnotatedCitation {
        &self.citation
    }

    /// The matched registry entry, with title, latest version and category
    pub fn record(&self) -> Option<&RegistryRecord> {
        self.record.as_ref()
    }

    pub fn into_parts(self) -> (AnnotatedCitation, Option<RegistryRecord>) {
        (self.citation, self.record)
    }
}

/// Verify a single identifier typed by a user
///
/// Year, section and title of the citation are absent; the link is still
/// derived. The registry entry comes along so callers can show its details.
pub fn lookup_standard(registry: &NormRegistry, raw_identifier: &str) -> StandardLookup {
    let citation = RawCitation::new(normalize_identifier(raw_identifier), None, None, None);
    let record = registry.lookup(citation.identifier());
    StandardLookup {
        citation: annotate(&citation, record.as_ref()),
        record,
    }
}

/// Whether a cited edition is the latest one the registry knows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Actuality {
    /// `None` when the standard is not registered
    pub is_actual: Option<bool>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

/// Compare a cited year against the registry's latest version
pub fn check_actuality(registry: &NormRegistry, raw_identifier: &str, year: &str) -> Actuality {
    let id = normalize_identifier(raw_identifier);
    let Some(record) = registry.lookup(&id) else {
        return Actuality {
            is_actual: None,
            message: "standard not found in registry".to_string(),
            latest_version: None,
        };
    };

    if record.latest_version() == year.trim() {
        Actuality {
            is_actual: Some(true),
            message: "current version".to_string(),
            latest_version: None,
        }
    } else {
        Actuality {
            is_actual: Some(false),
            message: format!("newer version available: {}", record.latest_version()),
            latest_version: Some(record.latest_version().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::extract_citations;
    use crate::record::Category;

    #[test]
    fn test_withdrawn() {
        let registry = NormRegistry::with_builtins();
        let lookup = lookup_standard(&registry, "DIN 1045");
        let result = lookup.citation();
        assert!(result.verified());
        assert_eq!(result.status(), Some(NormStatus::Withdrawn));
        assert_eq!(result.warning(), Some("withdrawn, superseded by DIN EN 1992"));

        let record = lookup.record().unwrap();
        assert_eq!(record.latest_version(), "2008");
        assert_eq!(record.replaced_by().unwrap(), "DIN EN 1992");
    }

    #[test]
    fn test_valid() {
        let registry = NormRegistry::with_builtins();
        let lookup = lookup_standard(&registry, "DIN EN 206:2023, Abschnitt 4");
        let result = lookup.citation();
        assert!(result.verified());
        assert_eq!(result.identifier(), "DIN EN 206");
        assert_eq!(result.status(), Some(NormStatus::Valid));
        assert_eq!(result.warning(), None);
        assert_eq!(result.year(), None);
        assert_eq!(lookup.record().unwrap().category(), Category::Hochbau);
    }

    #[test]
    fn test_unknown() {
        let registry = NormRegistry::with_builtins();
        let lookup = lookup_standard(&registry, "DIN 99999");
        assert!(lookup.record().is_none());
        let result = lookup.citation();
        assert!(!result.verified());
        assert_eq!(result.status(), None);
        assert_eq!(result.warning(), Some(NOT_FOUND_WARNING));
        assert_eq!(result.link(), "https://www.beuth.de/de/suche/DIN%2099999");
    }

    #[test]
    fn test_empty_identifier_is_unknown() {
        let registry = NormRegistry::with_builtins();
        assert!(!lookup_standard(&registry, "  ,").citation().verified());
    }

    #[test]
    fn test_verify_keeps_order_and_fields() {
        let registry = NormRegistry::with_builtins();
        let citations = extract_citations(
            "📋 [DIN EN 206:2023, Abschnitt 4.3 - Beton] nach DIN 1045 und DIN 99999",
        );
        let annotated = verify(&registry, &citations);

        assert_eq!(annotated.len(), citations.len());
        for (raw, ann) in citations.iter().zip(&annotated) {
            assert_eq!(raw.identifier(), ann.identifier());
            assert_eq!(raw.year(), ann.year());
            assert_eq!(raw.section(), ann.section());
            assert_eq!(raw.title(), ann.title());
            assert_eq!(raw.link(), ann.link());
        }
        let flags: Vec<_> = annotated.iter().map(|a| a.verified()).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_verify_empty() {
        let registry = NormRegistry::new();
        assert!(verify(&registry, &[]).is_empty());
    }

    #[test]
    fn test_actuality() {
        let registry = NormRegistry::with_builtins();

        let current = check_actuality(&registry, "DIN 4109", "2018");
        assert_eq!(current.is_actual, Some(true));

        let outdated = check_actuality(&registry, "DIN 4109", "1989");
        assert_eq!(outdated.is_actual, Some(false));
        assert_eq!(outdated.latest_version.as_deref(), Some("2018"));
        assert!(outdated.message.contains("2018"));

        let unknown = check_actuality(&registry, "DIN 99999", "2020");
        assert_eq!(unknown.is_actual, None);
    }
}
