//! Configuration types and parsing for querylens.yml

use crate::catalog::{CatalogState, PlatformCatalog};
use crate::error::{CoreError, CoreResult};
use crate::platform::CanonicalPlatforms;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names searched for when loading config from a directory
pub const CONFIG_FILE_NAMES: [&str; 2] = ["querylens.yml", "querylens.yaml"];

/// Querylens configuration from querylens.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SQL dialect used to parse queries
    #[serde(default)]
    pub dialect: Dialect,

    /// Canonical platform list; defines the order of platform results
    #[serde(default)]
    pub platforms: CanonicalPlatforms,

    /// osquery schema JSON to build the catalog from (bundled schema when unset)
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    /// Default for the include-virtual-tables flag
    #[serde(default)]
    pub include_virtual_tables: bool,
}

/// SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// SQLite, the grammar osquery accepts
    #[default]
    Sqlite,
    /// sqlparser's permissive generic dialect
    Generic,
}

impl Dialect {
    /// Lowercase name as written in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for querylens.yml or querylens.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Load configuration from a directory, or fall back to defaults if the
    /// directory has no config file
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if let Some(path) = &self.schema_path {
            if path.as_os_str().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "schema_path cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve `schema_path` against the directory the config was loaded from
    pub fn schema_path_absolute(&self, root: &Path) -> Option<PathBuf> {
        self.schema_path.as_ref().map(|p| root.join(p))
    }

    /// Build the catalog this config points at
    pub fn load_catalog(&self, root: &Path) -> CoreResult<PlatformCatalog> {
        match self.schema_path_absolute(root) {
            Some(path) => PlatformCatalog::from_path(&path),
            None => PlatformCatalog::bundled(),
        }
    }

    /// Build the catalog and pair it with the configured platform list
    pub fn load_catalog_state(&self, root: &Path) -> CoreResult<CatalogState> {
        let catalog = self.load_catalog(root)?;
        Ok(CatalogState::new(catalog, self.platforms.clone()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
