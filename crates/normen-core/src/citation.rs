//! Citation value types

use serde::Serialize;

use crate::normalize::StandardIdentifier;
use crate::record::NormStatus;
use crate::resolver::search_url;

/// A citation found in generated text, before verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawCitation {
    identifier: StandardIdentifier,
    year: Option<String>,
    section: Option<String>,
    title: Option<String>,
    link: String,
}

impl RawCitation {
    /// The link is always derived from the identifier.
    pub(crate) fn new(
        identifier: StandardIdentifier,
        year: Option<String>,
        section: Option<String>,
        title: Option<String>,
    ) -> Self {
        let link = search_url(&identifier);
        Self {
            identifier,
            year,
            section,
            title,
            link,
        }
    }

    pub fn identifier(&self) -> &StandardIdentifier {
        &self.identifier
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Two citations are the same source when identifier and year agree.
    /// An absent year only equals another absent year.
    pub(crate) fn same_source(&self, other: &RawCitation) -> bool {
        self.identifier == other.identifier && self.year == other.year
    }
}

/// A citation joined against the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedCitation {
    identifier: StandardIdentifier,
    year: Option<String>,
    section: Option<String>,
    title: Option<String>,
    link: String,
    verified: bool,
    status: Option<NormStatus>,
    warning: Option<String>,
}

impl AnnotatedCitation {
    pub(crate) fn from_parts(
        citation: &RawCitation,
        verified: bool,
        status: Option<NormStatus>,
        warning: Option<String>,
    ) -> Self {
        Self {
            identifier: citation.identifier.clone(),
            year: citation.year.clone(),
            section: citation.section.clone(),
            title: citation.title.clone(),
            link: citation.link.clone(),
            verified,
            status,
            warning,
        }
    }

    pub fn identifier(&self) -> &StandardIdentifier {
        &self.identifier
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn status(&self) -> Option<NormStatus> {
        self.status
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}

/// Render a citation the way exports print it:
/// `DIN EN 206:2023, Abschnitt 4.3 - Beton`
pub fn format_citation(citation: &RawCitation) -> String {
    let mut out = citation.identifier.to_string();

    if let Some(year) = &citation.year {
        out.push(':');
        out.push_str(year);
    }
    if let Some(section) = &citation.section {
        out.push_str(", Abschnitt ");
        out.push_str(section);
    }
    if let Some(title) = &citation.title {
        out.push_str(" - ");
        out.push_str(title);
    }

    out
}
