//! Platform identifiers and the canonical platform ordering

use crate::error::{CoreError, CoreResult};
use crate::newtype_string::define_identifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

define_identifier! {
    /// A target operating-system platform as named by the osquery schema
    /// (`darwin`, `windows`, `linux`, `chrome`, ...).
    pub struct Platform;
}

/// Platforms a query can be targeted at, in display order.
pub const DEFAULT_PLATFORMS: [&str; 4] = ["darwin", "windows", "linux", "chrome"];

/// Human-readable name for a platform identifier.
///
/// Identifiers without a known display name are returned unchanged.
pub fn display_name(platform: &str) -> &str {
    match platform {
        "darwin" => "macOS",
        "windows" => "Windows",
        "linux" => "Linux",
        "chrome" => "ChromeOS",
        other => other,
    }
}

/// The fixed, ordered list of platforms the system recognises as queryable.
///
/// Defines the order of every platform-compatibility result. Never empty and
/// never contains the same platform twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Platform>", into = "Vec<Platform>")]
pub struct CanonicalPlatforms(Vec<Platform>);

impl CanonicalPlatforms {
    /// Build a canonical list, rejecting empty lists and duplicates.
    pub fn new(platforms: Vec<Platform>) -> CoreResult<Self> {
        if platforms.is_empty() {
            return Err(CoreError::InvalidPlatforms {
                reason: "at least one platform is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for platform in &platforms {
            if !seen.insert(platform.as_str()) {
                return Err(CoreError::InvalidPlatforms {
                    reason: format!("duplicate platform '{}'", platform),
                });
            }
        }

        Ok(Self(platforms))
    }

    /// Build a canonical list from raw identifier strings.
    pub fn from_names<I, S>(names: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let platforms = names
            .into_iter()
            .map(|name| {
                Platform::try_new(name.as_ref()).ok_or_else(|| CoreError::InvalidPlatforms {
                    reason: "platform identifiers must not be empty".to_string(),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(platforms)
    }

    /// Whether `platform` is part of the canonical list
    pub fn contains(&self, platform: &str) -> bool {
        self.0.iter().any(|p| p == platform)
    }

    /// Iterate platforms in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.0.iter()
    }

    /// Canonical platforms as owned strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|p| p.to_string()).collect()
    }

    /// Number of canonical platforms
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CanonicalPlatforms {
    fn default() -> Self {
        Self(
            DEFAULT_PLATFORMS
                .iter()
                .filter_map(|name| Platform::try_new(name))
                .collect(),
        )
    }
}

impl TryFrom<Vec<Platform>> for CanonicalPlatforms {
    type Error = CoreError;

    fn try_from(platforms: Vec<Platform>) -> Result<Self, Self::Error> {
        Self::new(platforms)
    }
}

impl From<CanonicalPlatforms> for Vec<Platform> {
    fn from(platforms: CanonicalPlatforms) -> Self {
        platforms.0
    }
}

impl<'a> IntoIterator for &'a CanonicalPlatforms {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "platform_test.rs"]
mod tests;
