//! Error types for normen-core
//!
//! Extraction and verification never fail; errors only arise when a
//! registry is configured from outside the process.

use thiserror::Error;

/// Errors that can occur when loading registry records from TOML
#[derive(Error, Debug)]
pub enum RegistryLoadError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid category for {identifier}: {source}")]
    InvalidCategory {
        identifier: String,
        source: ParseCategoryError,
    },

    #[error("Invalid status for {identifier}: {status}")]
    InvalidStatus { identifier: String, status: String },

    /// A withdrawn standard must name its successor
    #[error("Withdrawn standard {0} has no replaced_by")]
    MissingReplacement(String),

    /// Only withdrawn standards may name a successor
    #[error("Standard {0} is valid but names a replacement")]
    UnexpectedReplacement(String),

    #[error("Empty identifier in registry file")]
    EmptyIdentifier,
}

impl From<std::io::Error> for RegistryLoadError {
    fn from(err: std::io::Error) -> Self {
        RegistryLoadError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for RegistryLoadError {
    fn from(err: toml::de::Error) -> Self {
        RegistryLoadError::Parse(err.to_string())
    }
}

/// Returned when a string names no known category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);
