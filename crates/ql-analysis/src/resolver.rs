//! Platform resolution for a list of real tables

use ql_core::{CanonicalPlatforms, PlatformCatalog};

/// Platforms able to run a query reading `tables`, in canonical order.
///
/// A query reading no tables runs everywhere. A table the catalog does not
/// know supports no platform, so it empties the result.
pub fn resolve_platforms<S: AsRef<str>>(
    tables: &[S],
    catalog: &PlatformCatalog,
    canonical: &CanonicalPlatforms,
) -> Vec<String> {
    if tables.is_empty() {
        return canonical.to_strings();
    }

    canonical
        .iter()
        .filter(|platform| {
            tables.iter().all(|table| {
                catalog
                    .platforms_for(table.as_ref())
                    .is_some_and(|supported| supported.contains(*platform))
            })
        })
        .map(|platform| platform.to_string())
        .collect()
}

/// Tables the catalog has no entry for, in input order
pub fn unknown_tables<S: AsRef<str>>(tables: &[S], catalog: &PlatformCatalog) -> Vec<String> {
    tables
        .iter()
        .map(|table| table.as_ref())
        .filter(|table| !catalog.contains(table))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
