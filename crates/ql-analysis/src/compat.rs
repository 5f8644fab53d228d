//! Table extraction and platform compatibility entry points
//!
//! The plain functions parse with the SQLite dialect and resolve against the
//! process-wide catalog from [`ql_core::catalog::global`]. The `_with`
//! variants take the parser and catalog explicitly.

use ql_core::catalog::{self, CatalogState};
use ql_core::{CanonicalPlatforms, PlatformCatalog};
use ql_sql::{extract_tables_from, SqlParser};
use serde::Serialize;

use crate::error::AnalysisResult;
use crate::resolver::{resolve_platforms, unknown_tables};

/// Full result of analysing one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    /// Real tables the query reads, in first-seen order
    pub tables: Vec<String>,
    /// Platforms able to run the query, in canonical order
    pub platforms: Vec<String>,
    /// Entries of `tables` missing from the catalog
    pub unknown_tables: Vec<String>,
}

/// Tables referenced by `sql`.
///
/// Names introduced by WITH items or subquery aliases are left out unless
/// `include_virtual_tables` is set. Table-valued functions are always left out.
pub fn extract_tables(sql: &str, include_virtual_tables: bool) -> AnalysisResult<Vec<String>> {
    extract_tables_with(&SqlParser::sqlite(), sql, include_virtual_tables)
}

/// [`extract_tables`] with an explicit parser
pub fn extract_tables_with(
    parser: &SqlParser,
    sql: &str,
    include_virtual_tables: bool,
) -> AnalysisResult<Vec<String>> {
    Ok(extract_tables_from(parser, sql, include_virtual_tables)?)
}

/// Platforms able to run `sql`, in canonical order
pub fn check_platform_compatibility(
    sql: &str,
    include_virtual_tables: bool,
) -> AnalysisResult<Vec<String>> {
    let state = catalog::global();
    check_platform_compatibility_with(
        &SqlParser::sqlite(),
        &state.catalog,
        &state.platforms,
        sql,
        include_virtual_tables,
    )
}

/// [`check_platform_compatibility`] with an explicit parser and catalog
pub fn check_platform_compatibility_with(
    parser: &SqlParser,
    catalog: &PlatformCatalog,
    canonical: &CanonicalPlatforms,
    sql: &str,
    include_virtual_tables: bool,
) -> AnalysisResult<Vec<String>> {
    let tables = extract_tables_with(parser, sql, include_virtual_tables)?;
    Ok(resolve_platforms(&tables, catalog, canonical))
}

/// Tables, platforms and catalog misses for `sql` using the process-wide catalog
pub fn analyze_query(sql: &str, include_virtual_tables: bool) -> AnalysisResult<CompatibilityReport> {
    analyze_query_with(
        &SqlParser::sqlite(),
        catalog::global(),
        sql,
        include_virtual_tables,
    )
}

/// [`analyze_query`] with an explicit parser and catalog
pub fn analyze_query_with(
    parser: &SqlParser,
    state: &CatalogState,
    sql: &str,
    include_virtual_tables: bool,
) -> AnalysisResult<CompatibilityReport> {
    let tables = extract_tables_from(parser, sql, include_virtual_tables)?;
    let platforms = resolve_platforms(&tables, &state.catalog, &state.platforms);
    let unknown_tables = unknown_tables(&tables, &state.catalog);

    if !unknown_tables.is_empty() {
        log::debug!(
            "tables missing from the catalog: {}",
            unknown_tables.join(", ")
        );
    }

    Ok(CompatibilityReport {
        tables,
        platforms,
        unknown_tables,
    })
}

#[cfg(test)]
#[path = "compat_test.rs"]
mod tests;
