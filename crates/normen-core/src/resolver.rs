//! External lookup links for standards
//!
//! Every link handed out by this crate, whether it comes from the extractor
//! or from a registry lookup, is built here.

use crate::normalize::StandardIdentifier;

/// Base of the publisher's search page; the encoded identifier is appended.
pub const SEARCH_URL_BASE: &str = "https://www.beuth.de/de/suche/";

/// Get the search URL for a canonical identifier
///
/// Percent-encodes the identifier, so `DIN EN 206` becomes
/// `https://www.beuth.de/de/suche/DIN%20EN%20206`.
pub fn search_url(id: &StandardIdentifier) -> String {
    format!("{}{}", SEARCH_URL_BASE, urlencoding::encode(id.as_str()))
}
