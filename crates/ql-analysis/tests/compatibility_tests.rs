//! End-to-end behaviour of the public table and platform entry points

use ql_analysis::{
    check_platform_compatibility, check_platform_compatibility_with, extract_tables,
    AnalysisError,
};
use ql_core::{CanonicalPlatforms, PlatformCatalog};
use ql_sql::SqlParser;

fn canonical(names: &[&str]) -> CanonicalPlatforms {
    CanonicalPlatforms::from_names(names).unwrap()
}

#[test]
fn test_tableless_query_runs_everywhere() {
    assert!(extract_tables("SELECT 1", false).unwrap().is_empty());
    assert_eq!(
        check_platform_compatibility("SELECT 1", false).unwrap(),
        vec!["darwin", "windows", "linux", "chrome"]
    );
}

#[test]
fn test_universally_supported_table_runs_everywhere() {
    // the bundled schema ships `users` on every default platform
    assert_eq!(
        check_platform_compatibility("SELECT username FROM users", false).unwrap(),
        vec!["darwin", "windows", "linux", "chrome"]
    );
}

#[test]
fn test_join_intersects_platforms_in_canonical_order() {
    let catalog = PlatformCatalog::new()
        .with_table("a", ["macos", "windows"])
        .with_table("b", ["macos", "linux"]);
    let platforms = check_platform_compatibility_with(
        &SqlParser::sqlite(),
        &catalog,
        &canonical(&["macos", "linux", "windows"]),
        "SELECT * FROM a JOIN b",
        false,
    )
    .unwrap();
    assert_eq!(platforms, vec!["macos"]);
}

#[test]
fn test_cte_names_follow_the_flag() {
    let sql = "WITH cte AS (SELECT * FROM real_table) SELECT * FROM cte";
    assert_eq!(extract_tables(sql, false).unwrap(), vec!["real_table"]);
    assert_eq!(extract_tables(sql, true).unwrap(), vec!["real_table", "cte"]);
}

#[test]
fn test_table_valued_functions_never_reported() {
    for flag in [false, true] {
        let tables = extract_tables("SELECT * FROM json_each(x)", flag).unwrap();
        assert!(!tables.iter().any(|t| t == "json_each"));
    }
}

#[test]
fn test_malformed_sql_fails_both_entry_points() {
    let sql = "SELECTx * FROM t";
    assert!(matches!(
        extract_tables(sql, false),
        Err(AnalysisError::ParseError { .. })
    ));
    assert!(matches!(
        check_platform_compatibility(sql, true),
        Err(AnalysisError::ParseError { .. })
    ));
}

#[test]
fn test_unknown_table_empties_platforms() {
    assert!(check_platform_compatibility("SELECT * FROM no_such_table", false)
        .unwrap()
        .is_empty());
}

#[test]
fn test_platform_result_is_canonical_subsequence() {
    let canonical = CanonicalPlatforms::default().to_strings();
    for sql in [
        "SELECT * FROM apps",
        "SELECT * FROM processes p JOIN listening_ports l ON p.pid = l.pid",
        "SELECT * FROM users, os_version",
    ] {
        let platforms = check_platform_compatibility(sql, false).unwrap();
        let mut rest = canonical.iter();
        for platform in &platforms {
            assert!(
                rest.any(|c| c == platform),
                "{platform} out of canonical order for {sql}"
            );
        }
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let sql = "SELECT * FROM (SELECT * FROM processes) p JOIN users u ON p.uid = u.uid";
    let first = extract_tables(sql, false).unwrap();
    let second = extract_tables(sql, false).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["processes", "users"]);
}

#[test]
fn test_concurrent_calls_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                check_platform_compatibility("SELECT * FROM apps JOIN users", false).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["darwin"]);
    }
}
