//! TOML loader for additional registry records
//!
//! Loads standards from registry.toml files with the following structure:
//!
//! ```toml
//! [[standard]]
//! identifier = "DIN 4108"
//! title = "Wärmeschutz und Energie-Einsparung in Gebäuden"
//! latest_version = "2013"
//! category = "Hochbau"
//!
//! [[standard]]
//! identifier = "DIN 4102"
//! title = "Brandverhalten von Baustoffen und Bauteilen"
//! latest_version = "1998"
//! status = "withdrawn"
//! replaced_by = "DIN EN 13501"
//! category = "Hochbau"
//! ```
//!
//! `status` defaults to `valid`. The German spellings `gültig` and
//! `zurückgezogen` are accepted as well.

use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryLoadError;
use crate::normalize::StandardIdentifier;
use crate::record::{Category, RegistryRecord};

/// TOML representation of one standard
///
/// Identifiers are normalized while deserializing.
#[derive(Debug, Deserialize)]
struct TomlStandard {
    identifier: StandardIdentifier,
    title: String,
    latest_version: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    replaced_by: Option<StandardIdentifier>,
    category: String,
}

/// Full TOML registry document
#[derive(Debug, Deserialize)]
struct TomlRegistry {
    #[serde(default)]
    standard: Vec<TomlStandard>,
}

/// Load registry records from a TOML file
pub fn load_records_from_toml(path: &Path) -> Result<Vec<RegistryRecord>, RegistryLoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

/// Parse registry records from TOML text
pub fn parse_records(content: &str) -> Result<Vec<RegistryRecord>, RegistryLoadError> {
    let toml: TomlRegistry = toml::from_str(content)?;
    toml.standard.into_iter().map(parse_standard).collect()
}

enum Standing {
    Valid,
    Withdrawn,
}

fn parse_status(identifier: &str, s: Option<&str>) -> Result<Standing, RegistryLoadError> {
    let Some(s) = s else {
        return Ok(Standing::Valid);
    };
    match s.trim().to_lowercase().as_str() {
        "valid" | "gültig" => Ok(Standing::Valid),
        "withdrawn" | "zurückgezogen" => Ok(Standing::Withdrawn),
        _ => Err(RegistryLoadError::InvalidStatus {
            identifier: identifier.to_string(),
            status: s.to_string(),
        }),
    }
}

fn parse_standard(toml: TomlStandard) -> Result<RegistryRecord, RegistryLoadError> {
    let identifier = toml.identifier;
    if identifier.is_empty() {
        return Err(RegistryLoadError::EmptyIdentifier);
    }

    let category: Category = toml
        .category
        .parse()
        .map_err(|source| RegistryLoadError::InvalidCategory {
            identifier: identifier.to_string(),
            source,
        })?;

    let replaced_by = toml.replaced_by.filter(|id| !id.is_empty());

    match (parse_status(identifier.as_str(), toml.status.as_deref())?, replaced_by) {
        (Standing::Valid, None) => Ok(RegistryRecord::valid(
            identifier,
            toml.title,
            toml.latest_version,
            category,
        )),
        (Standing::Valid, Some(_)) => Err(RegistryLoadError::UnexpectedReplacement(
            identifier.to_string(),
        )),
        (Standing::Withdrawn, Some(successor)) => Ok(RegistryRecord::withdrawn(
            identifier,
            toml.title,
            toml.latest_version,
            category,
            successor,
        )),
        (Standing::Withdrawn, None) => {
            Err(RegistryLoadError::MissingReplacement(identifier.to_string()))
        }
    }
}
