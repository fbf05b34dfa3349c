//! Canonical standard identifiers
//!
//! A raw identifier as it appears in prose ("DIN EN 206:2023, Abschnitt 4.3")
//! is reduced to the key the registry is indexed by ("DIN EN 206").

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A standard identifier in canonical form, e.g. `DIN EN 206`.
///
/// The only way to obtain one is [`normalize_identifier`], so a value of this
/// type never contains a whitespace run longer than one space, a `:YYYY`
/// year marker, or a comma-introduced suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StandardIdentifier(String);

impl StandardIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StandardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StandardIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StandardIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StandardIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Deserialized identifiers go through the normalizer like every other input.
impl<'de> Deserialize<'de> for StandardIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(normalize_identifier(&raw))
    }
}

/// Normalize a raw identifier into its canonical form.
///
/// Steps, in order:
/// 1. remove every `:` followed by exactly four digits
/// 2. drop everything from the first `,` onward
/// 3. collapse whitespace runs to a single space and trim
///
/// Total and idempotent. Garbage in yields some (possibly empty) identifier.
pub fn normalize_identifier(raw: &str) -> StandardIdentifier {
    let without_year = strip_year_markers(raw);
    let head = match without_year.find(',') {
        Some(idx) => &without_year[..idx],
        None => without_year.as_str(),
    };
    let collapsed = head.split_whitespace().collect::<Vec<_>>().join(" ");
    StandardIdentifier(collapsed)
}

/// Remove `:YYYY` markers. A colon followed by five or more digits is not a
/// year marker and is left alone.
fn strip_year_markers(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut copied_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b':' && is_year_at(bytes, i + 1) {
            out.push_str(&s[copied_to..i]);
            i += 5;
            copied_to = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&s[copied_to..]);
    out
}

fn is_year_at(bytes: &[u8], start: usize) -> bool {
    let end = start + 4;
    end <= bytes.len()
        && bytes[start..end].iter().all(u8::is_ascii_digit)
        && bytes.get(end).map_or(true, |b| !b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_year() {
        assert_eq!(normalize_identifier("DIN 1045-2:2008"), "DIN 1045-2");
    }

    #[test]
    fn test_strips_section_and_title() {
        assert_eq!(
            normalize_identifier("DIN EN 206:2023, Abschnitt 4.3 - Beton"),
            "DIN EN 206"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_identifier("  DIN \t EN\n 206  "), "DIN EN 206");
    }

    #[test]
    fn test_five_digits_is_not_a_year() {
        assert_eq!(normalize_identifier("DIN 1045:20081"), "DIN 1045:20081");
    }

    #[test]
    fn test_every_year_marker_removed() {
        assert_eq!(normalize_identifier("VDI 6022:2018:2011"), "VDI 6022");
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(normalize_identifier("").is_empty());
        assert!(normalize_identifier(", whatever").is_empty());
        assert!(normalize_identifier(":2020").is_empty());
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(normalize_identifier("📋 DIN:2020 ü"), "📋 DIN ü");
    }

    #[test]
    fn test_idempotent_on_known_forms() {
        for raw in ["DIN 1045", "DIN EN 206:2023, 4.3", " VOB  Teil B:2016 ", "a::20082009"] {
            let once = normalize_identifier(raw);
            assert_eq!(normalize_identifier(once.as_str()), once);
        }
    }

    #[test]
    fn test_deserialize_normalizes() {
        let id: StandardIdentifier = serde_json::from_str("\"DIN  276:2018\"").unwrap();
        assert_eq!(id, "DIN 276");
    }
}
