//! Citation extraction from generated text
//!
//! Five recognition patterns, one per citation convention the upstream
//! generator emits. They run in table order and every match of one pattern
//! is processed before the next pattern starts, so when two patterns cover
//! the same span the earlier one wins.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::citation::RawCitation;
use crate::normalize::normalize_identifier;

/// Citation convention recognized by one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationForm {
    /// `📋 [DIN EN 206:2023, Abschnitt 4.3 - Beton]`
    Decorated,
    /// `DIN 1045-2:2008`, `DIN EN 1992-1-1`
    Din,
    /// `VOB Teil B:2016`
    Vob,
    /// `EN 1992-1-1`, but not the `EN` of `DIN EN`
    En,
    /// `VDI 6022:2018`
    Vdi,
}

type ExtractFn = fn(&str, &Captures<'_>) -> Option<RawCitation>;

/// A recognition pattern and the logic turning its groups into a citation
struct CitationPattern {
    form: CitationForm,
    regex: Regex,
    extract: ExtractFn,
}

impl CitationPattern {
    fn new(form: CitationForm, pattern: &str, extract: ExtractFn) -> Self {
        Self {
            form,
            regex: Regex::new(pattern).expect("citation pattern"),
            extract,
        }
    }

    /// Append every new citation this pattern finds to `accepted`
    fn collect_into(&self, text: &str, accepted: &mut Vec<RawCitation>) {
        for caps in self.regex.captures_iter(text) {
            let Some(candidate) = (self.extract)(text, &caps) else {
                continue;
            };
            if !accepted.iter().any(|c| c.same_source(&candidate)) {
                accepted.push(candidate);
            }
        }
    }
}

// Years are exactly four digits; `\b` keeps `:20081` from yielding `2008`.
lazy_static! {
    static ref CITATION_PATTERNS: Vec<CitationPattern> = vec![
        CitationPattern::new(
            CitationForm::Decorated,
            r"(?i)📋\s*\[(?P<id>DIN(?:\s+EN)?\s+\d+(?:-\d+)*(?:/\d+(?:-\d+)*)?)(?::?(?P<year>\d{4})\b)?,?\s*(?:Abschnitt\s+)?(?P<section>\d+(?:\.\d+)*)?\.?\s*(?:-\s*)?(?P<title>[^\]]+)?\]",
            from_groups,
        ),
        CitationPattern::new(
            CitationForm::Din,
            r"(?i)\b(?P<id>DIN(?:\s+EN)?\s+\d+(?:-\d+)*(?:/\d+(?:-\d+)*)?)(?::(?P<year>\d{4})\b)?",
            from_groups,
        ),
        CitationPattern::new(
            CitationForm::Vob,
            r"(?i)\b(?P<id>VOB\s+Teil\s+[ABC])\b(?::(?P<year>\d{4})\b)?",
            from_groups,
        ),
        CitationPattern::new(
            CitationForm::En,
            r"(?i)\b(?P<id>EN\s+\d+(?:-\d+)*)(?::(?P<year>\d{4})\b)?",
            bare_en,
        ),
        CitationPattern::new(
            CitationForm::Vdi,
            r"(?i)\b(?P<id>VDI\s+\d+)(?::(?P<year>\d{4})\b)?",
            from_groups,
        ),
    ];
}

/// The order in which patterns are applied, highest precedence first
pub fn pattern_order() -> Vec<CitationForm> {
    CITATION_PATTERNS.iter().map(|p| p.form).collect()
}

/// Extract all standard citations from text
///
/// Deduplicated on (identifier, year) and ordered by first acceptance.
/// A citation without a year never duplicates one with a year.
pub fn extract_citations(text: &str) -> Vec<RawCitation> {
    let mut accepted = Vec::new();
    for pattern in CITATION_PATTERNS.iter() {
        pattern.collect_into(text, &mut accepted);
    }
    tracing::debug!("Extracted {} citations from {} bytes", accepted.len(), text.len());
    accepted
}

/// Extract citations using a single pattern
pub fn extract_with(form: CitationForm, text: &str) -> Vec<RawCitation> {
    let mut accepted = Vec::new();
    if let Some(pattern) = CITATION_PATTERNS.iter().find(|p| p.form == form) {
        pattern.collect_into(text, &mut accepted);
    }
    accepted
}

fn from_groups(_text: &str, caps: &Captures<'_>) -> Option<RawCitation> {
    let identifier = normalize_identifier(caps.name("id")?.as_str());
    if identifier.is_empty() {
        return None;
    }

    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
    // Leftover punctuation or digits are not a title.
    let title = caps
        .name("title")
        .map(|m| m.as_str().trim())
        .filter(|t| t.chars().any(char::is_alphabetic))
        .map(String::from);

    Some(RawCitation::new(
        identifier,
        group("year"),
        group("section"),
        title,
    ))
}

/// Like [`from_groups`], but skips the `EN` that belongs to a `DIN EN`
/// identifier.
fn bare_en(text: &str, caps: &Captures<'_>) -> Option<RawCitation> {
    let start = caps.get(0)?.start();
    if follows_din(&text[..start]) {
        return None;
    }
    from_groups(text, caps)
}

fn follows_din(before: &str) -> bool {
    let trimmed = before.trim_end();
    if trimmed.len() == before.len() {
        return false;
    }
    trimmed
        .len()
        .checked_sub(3)
        .and_then(|idx| trimmed.get(idx..))
        .map_or(false, |tail| tail.eq_ignore_ascii_case("DIN"))
}
