//! Identifier format validation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole-string shapes of the identifier families the registry knows about
    static ref FORMAT_PATTERNS: Vec<Regex> = [
        r"(?i)^DIN(?:\sEN)?\s+\d+(?:-\d+)?$",
        r"(?i)^EN\s+\d+(?:-\d+)?$",
        r"(?i)^VOB\s+Teil\s+[ABC]$",
        r"(?i)^VDI\s+\d+$",
        r"(?i)^ISO\s+\d+$",
        r"(?i)^DIN\sV\s+\d+$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("identifier format pattern"))
    .collect();
}

/// Check whether a string has the shape of a standard identifier.
///
/// This is a syntactic check only; `DIN 99999` passes even though no such
/// standard is registered.
pub fn is_valid_format(identifier: &str) -> bool {
    FORMAT_PATTERNS.iter().any(|p| p.is_match(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_formats() {
        assert!(is_valid_format("DIN 1045"));
        assert!(is_valid_format("DIN 1045-2"));
        assert!(is_valid_format("DIN EN 206"));
        assert!(is_valid_format("EN 1992-1"));
        assert!(is_valid_format("VOB Teil C"));
        assert!(is_valid_format("VDI 6022"));
        assert!(is_valid_format("ISO 9001"));
        assert!(is_valid_format("DIN V 18599"));
        assert!(is_valid_format("din en 206"));
    }

    #[test]
    fn test_invalid_formats() {
        assert!(!is_valid_format(""));
        assert!(!is_valid_format("DIN"));
        assert!(!is_valid_format("DIN 1045:2008"));
        assert!(!is_valid_format("VOB Teil D"));
        assert!(!is_valid_format("EN 1992-1-1"));
        assert!(!is_valid_format("Norm 42"));
    }
}
