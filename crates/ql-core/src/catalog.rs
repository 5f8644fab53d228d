//! Platform catalog: which platforms each schema table is available on
//!
//! The catalog is built once (from the bundled osquery schema or a schema file
//! named in config) and is read-only afterwards. A process-wide instance can be
//! installed at startup and read concurrently without locking.

use crate::error::{CoreError, CoreResult};
use crate::platform::{CanonicalPlatforms, Platform};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

/// osquery schema bundled with the binary
const BUNDLED_SCHEMA: &str = include_str!("../assets/osquery_schema.json");

/// One row of an osquery-style schema file. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SchemaRow {
    name: String,
    #[serde(default)]
    platforms: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    evented: bool,
}

/// Catalog entry for a single table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    /// Table name as spelled in the schema
    pub name: String,
    /// Platforms the table can be queried on
    pub platforms: BTreeSet<Platform>,
    /// Schema description, when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the table is populated from an event stream
    pub evented: bool,
}

/// Mapping from table name to the set of platforms supporting it.
///
/// Lookups are ASCII case-insensitive, matching how SQLite resolves table names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformCatalog {
    tables: BTreeMap<String, TableEntry>,
}

impl PlatformCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog built from the schema asset shipped with the crate
    pub fn bundled() -> CoreResult<Self> {
        Self::from_schema_json(BUNDLED_SCHEMA)
    }

    /// Load a catalog from an osquery schema JSON file
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::SchemaNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_schema_json(&content)
    }

    /// Parse an osquery schema document: a JSON array of
    /// `{ "name": ..., "platforms": [...] }` objects.
    ///
    /// Rows naming the same table (case-insensitively) are merged.
    pub fn from_schema_json(json: &str) -> CoreResult<Self> {
        let rows: Vec<SchemaRow> =
            serde_json::from_str(json).map_err(|e| CoreError::SchemaParseError {
                message: e.to_string(),
            })?;

        let mut catalog = Self::new();
        for (index, row) in rows.into_iter().enumerate() {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(CoreError::SchemaInvalidEntry {
                    index,
                    reason: "table name is empty".to_string(),
                });
            }

            let platforms = row
                .platforms
                .iter()
                .map(|p| {
                    Platform::try_new(p).ok_or_else(|| CoreError::SchemaInvalidEntry {
                        index,
                        reason: format!("table '{}' lists an empty platform", name),
                    })
                })
                .collect::<CoreResult<BTreeSet<_>>>()?;

            let key = name.to_ascii_lowercase();
            match catalog.tables.get_mut(&key) {
                Some(existing) => {
                    log::warn!(
                        "Schema lists table '{}' more than once; merging platforms",
                        name
                    );
                    existing.platforms.extend(platforms);
                    existing.evented |= row.evented;
                    if existing.description.is_none() {
                        existing.description = row.description;
                    }
                }
                None => {
                    catalog.tables.insert(
                        key,
                        TableEntry {
                            name: name.to_string(),
                            platforms,
                            description: row.description,
                            evented: row.evented,
                        },
                    );
                }
            }
        }

        Ok(catalog)
    }

    /// Return a copy of this catalog with `name` mapped to `platforms`,
    /// replacing any existing entry for that table.
    pub fn with_table<I, S>(mut self, name: &str, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let platforms = platforms
            .into_iter()
            .filter_map(|p| Platform::try_new(p.as_ref()))
            .collect();
        self.tables.insert(
            name.to_ascii_lowercase(),
            TableEntry {
                name: name.to_string(),
                platforms,
                description: None,
                evented: false,
            },
        );
        self
    }

    /// Platforms supporting `table`, or `None` if the catalog has no entry
    pub fn platforms_for(&self, table: &str) -> Option<&BTreeSet<Platform>> {
        self.get(table).map(|entry| &entry.platforms)
    }

    /// Full catalog entry for `table`
    pub fn get(&self, table: &str) -> Option<&TableEntry> {
        self.tables.get(&table.to_ascii_lowercase())
    }

    /// Whether the catalog knows `table`
    pub fn contains(&self, table: &str) -> bool {
        self.get(table).is_some()
    }

    /// Table names in sorted order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.values().map(|entry| entry.name.as_str())
    }

    /// Catalog entries in sorted table-name order
    pub fn entries(&self) -> impl Iterator<Item = &TableEntry> {
        self.tables.values()
    }

    /// Number of tables in the catalog
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the catalog has no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Platforms referenced by catalog entries that `canonical` does not list
    pub fn unrecognized_platforms(&self, canonical: &CanonicalPlatforms) -> BTreeSet<Platform> {
        self.tables
            .values()
            .flat_map(|entry| entry.platforms.iter())
            .filter(|p| !canonical.contains(p.as_str()))
            .cloned()
            .collect()
    }
}

/// The catalog together with the canonical platform list it is resolved against
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Table to platform mapping
    pub catalog: PlatformCatalog,
    /// Output order and bound for platform results
    pub platforms: CanonicalPlatforms,
}

impl CatalogState {
    /// Pair a catalog with its canonical platforms
    pub fn new(catalog: PlatformCatalog, platforms: CanonicalPlatforms) -> Self {
        let unrecognized = catalog.unrecognized_platforms(&platforms);
        if !unrecognized.is_empty() {
            let names: Vec<&str> = unrecognized.iter().map(|p| p.as_str()).collect();
            log::warn!(
                "Catalog platforms outside the canonical list will be ignored: {}",
                names.join(", ")
            );
        }
        Self { catalog, platforms }
    }

    /// Bundled schema with the default canonical platforms
    fn bundled() -> Self {
        let catalog = PlatformCatalog::bundled().unwrap_or_else(|e| {
            log::warn!("Bundled schema could not be loaded, using an empty catalog: {e}");
            PlatformCatalog::new()
        });
        Self::new(catalog, CanonicalPlatforms::default())
    }
}

static GLOBAL: OnceLock<CatalogState> = OnceLock::new();

/// Install the process-wide catalog.
///
/// Must run before the first call to [`global`]; only the first install wins.
pub fn install(
    catalog: PlatformCatalog,
    platforms: CanonicalPlatforms,
) -> CoreResult<&'static CatalogState> {
    GLOBAL
        .set(CatalogState::new(catalog, platforms))
        .map_err(|_| CoreError::CatalogAlreadyInstalled)?;
    Ok(global())
}

/// The process-wide catalog, falling back to the bundled schema if nothing
/// was installed.
pub fn global() -> &'static CatalogState {
    GLOBAL.get_or_init(CatalogState::bundled)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
