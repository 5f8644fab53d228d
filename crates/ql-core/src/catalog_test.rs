use super::*;
use std::io::Write;

fn names(set: &BTreeSet<Platform>) -> Vec<&str> {
    set.iter().map(|p| p.as_str()).collect()
}

#[test]
fn test_parse_schema_json() {
    let json = r#"[
        {"name": "users", "platforms": ["darwin", "linux", "windows"], "columns": []},
        {"name": "apps", "platforms": ["darwin"], "description": "Installed apps", "evented": false}
    ]"#;
    let catalog = PlatformCatalog::from_schema_json(json).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        names(catalog.platforms_for("users").unwrap()),
        vec!["darwin", "linux", "windows"]
    );
    assert_eq!(
        catalog.get("apps").unwrap().description.as_deref(),
        Some("Installed apps")
    );
    assert!(catalog.platforms_for("processes").is_none());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = PlatformCatalog::new().with_table("Users", ["darwin"]);
    assert!(catalog.contains("users"));
    assert!(catalog.contains("USERS"));
    assert_eq!(catalog.table_names().collect::<Vec<_>>(), vec!["Users"]);
}

#[test]
fn test_duplicate_rows_merge_platforms() {
    let json = r#"[
        {"name": "file", "platforms": ["darwin"]},
        {"name": "FILE", "platforms": ["windows"], "evented": true}
    ]"#;
    let catalog = PlatformCatalog::from_schema_json(json).unwrap();

    assert_eq!(catalog.len(), 1);
    let entry = catalog.get("file").unwrap();
    assert_eq!(names(&entry.platforms), vec!["darwin", "windows"]);
    assert!(entry.evented);
}

#[test]
fn test_missing_platforms_is_empty_set() {
    let catalog = PlatformCatalog::from_schema_json(r#"[{"name": "mystery"}]"#).unwrap();
    assert!(catalog.platforms_for("mystery").unwrap().is_empty());
}

#[test]
fn test_rejects_empty_table_name() {
    let result = PlatformCatalog::from_schema_json(r#"[{"name": "ok"}, {"name": " "}]"#);
    assert!(matches!(
        result,
        Err(CoreError::SchemaInvalidEntry { index: 1, .. })
    ));
}

#[test]
fn test_rejects_empty_platform() {
    let result = PlatformCatalog::from_schema_json(r#"[{"name": "t", "platforms": [""]}]"#);
    assert!(matches!(
        result,
        Err(CoreError::SchemaInvalidEntry { index: 0, .. })
    ));
}

#[test]
fn test_rejects_malformed_json() {
    let result = PlatformCatalog::from_schema_json("{not json");
    assert!(matches!(result, Err(CoreError::SchemaParseError { .. })));
}

#[test]
fn test_rejects_wrong_json_shape() {
    let result = PlatformCatalog::from_schema_json(r#"{"name": "users"}"#);
    let Err(CoreError::SchemaParseError { message }) = result else {
        panic!("expected SchemaParseError");
    };
    assert!(!message.is_empty());
}

#[test]
fn test_bundled_schema_loads() {
    let catalog = PlatformCatalog::bundled().unwrap();
    assert!(!catalog.is_empty());
    assert_eq!(
        names(catalog.platforms_for("users").unwrap()),
        vec!["chrome", "darwin", "freebsd", "linux", "windows"]
    );
    assert_eq!(names(catalog.platforms_for("apps").unwrap()), vec!["darwin"]);
    assert!(catalog.get("process_events").unwrap().evented);
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name": "registry", "platforms": ["windows"]}}]"#).unwrap();

    let catalog = PlatformCatalog::from_path(file.path()).unwrap();
    assert_eq!(
        names(catalog.platforms_for("registry").unwrap()),
        vec!["windows"]
    );
}

#[test]
fn test_from_path_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = PlatformCatalog::from_path(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(CoreError::SchemaNotFound { .. })));
}

#[test]
fn test_unrecognized_platforms() {
    let catalog = PlatformCatalog::new()
        .with_table("a", ["darwin", "freebsd"])
        .with_table("b", ["linux"]);
    let extra = catalog.unrecognized_platforms(&CanonicalPlatforms::default());
    assert_eq!(names(&extra), vec!["freebsd"]);
}

#[test]
fn test_state_keeps_foreign_platforms() {
    let catalog = PlatformCatalog::new().with_table("a", ["darwin", "freebsd"]);
    let state = CatalogState::new(catalog, CanonicalPlatforms::default());
    let platforms = state.catalog.platforms_for("a").unwrap();
    assert_eq!(names(platforms), vec!["darwin", "freebsd"]);
}

#[test]
fn test_install_after_global_is_rejected() {
    let state = global();
    assert!(!state.catalog.is_empty());
    assert_eq!(state.platforms, CanonicalPlatforms::default());

    let result = install(PlatformCatalog::new(), CanonicalPlatforms::default());
    assert!(matches!(result, Err(CoreError::CatalogAlreadyInstalled)));
}
