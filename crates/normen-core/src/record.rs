//! Registry record types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCategoryError;
use crate::normalize::StandardIdentifier;

/// Construction discipline a standard belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Hochbau,
    Tiefbau,
    Ingenieurbau,
    Ausbau,
    #[serde(rename = "TGA")]
    Tga,
    Projektmanagement,
    Nachhaltigkeit,
}

impl Category {
    /// Get all categories
    pub fn all() -> &'static [Category] {
        &[
            Category::Hochbau,
            Category::Tiefbau,
            Category::Ingenieurbau,
            Category::Ausbau,
            Category::Tga,
            Category::Projektmanagement,
            Category::Nachhaltigkeit,
        ]
    }

    /// Display name, as shown to users and matched by search
    pub fn name(&self) -> &'static str {
        match self {
            Category::Hochbau => "Hochbau",
            Category::Tiefbau => "Tiefbau",
            Category::Ingenieurbau => "Ingenieurbau",
            Category::Ausbau => "Ausbau",
            Category::Tga => "TGA",
            Category::Projektmanagement => "Projektmanagement",
            Category::Nachhaltigkeit => "Nachhaltigkeit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive, so both `TGA` and the URL slug `tga` parse.
impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Whether a standard is in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormStatus {
    Valid,
    Withdrawn,
}

/// A known standard
///
/// Built through [`RegistryRecord::valid`] or [`RegistryRecord::withdrawn`],
/// so `replaced_by` is present exactly when the status is `Withdrawn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryRecord {
    identifier: StandardIdentifier,
    title: String,
    latest_version: String,
    status: NormStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    replaced_by: Option<StandardIdentifier>,
    category: Category,
}

impl RegistryRecord {
    /// A standard currently in force
    pub fn valid(
        identifier: StandardIdentifier,
        title: impl Into<String>,
        latest_version: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            identifier,
            title: title.into(),
            latest_version: latest_version.into(),
            status: NormStatus::Valid,
            replaced_by: None,
            category,
        }
    }

    /// A withdrawn standard and its successor
    pub fn withdrawn(
        identifier: StandardIdentifier,
        title: impl Into<String>,
        latest_version: impl Into<String>,
        category: Category,
        replaced_by: StandardIdentifier,
    ) -> Self {
        Self {
            identifier,
            title: title.into(),
            latest_version: latest_version.into(),
            status: NormStatus::Withdrawn,
            replaced_by: Some(replaced_by),
            category,
        }
    }

    pub fn identifier(&self) -> &StandardIdentifier {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    pub fn status(&self) -> NormStatus {
        self.status
    }

    pub fn replaced_by(&self) -> Option<&StandardIdentifier> {
        self.replaced_by.as_ref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Case-insensitive substring match on identifier, title or category.
    /// `query` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        self.identifier.as_str().to_lowercase().contains(query)
            || self.title.to_lowercase().contains(query)
            || self.category.name().to_lowercase().contains(query)
    }
}
