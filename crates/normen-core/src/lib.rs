//! Citation extraction and norm verification for construction standards
//!
//! This crate turns generated prose into checked references:
//! - Extraction of DIN, DIN EN, EN, VOB and VDI citations from text
//! - Identifier normalization to canonical registry keys
//! - A registry of known standards with category listing and search
//! - Verification of citations with status, warnings and lookup links

pub mod citation;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod validators;
pub mod verification;

pub use citation::{format_citation, AnnotatedCitation, RawCitation};
pub use engine::NormEngine;
pub use error::{ParseCategoryError, RegistryLoadError};
pub use extractors::{extract_citations, extract_with, pattern_order, CitationForm};
pub use normalize::{normalize_identifier, StandardIdentifier};
pub use record::{Category, NormStatus, RegistryRecord};
pub use registry::{NormRegistry, RegistryStatistics};
pub use resolver::{search_url, SEARCH_URL_BASE};
pub use validators::is_valid_format;
pub use verification::{check_actuality, lookup_standard, verify, Actuality, StandardLookup};
