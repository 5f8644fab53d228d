use super::*;
use std::io::Write;

fn input(sql: Option<&str>, file: Option<PathBuf>, include_virtual: bool) -> QueryInput {
    QueryInput {
        sql: sql.map(str::to_string),
        file,
        include_virtual,
    }
}

fn global(config: Option<PathBuf>, dialect: Option<&str>) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        config,
        schema: None,
        dialect: dialect.map(str::to_string),
    }
}

#[test]
fn test_read_sql_prefers_argument() {
    let sql = read_sql(&input(Some("SELECT 1"), None, false)).unwrap();
    assert_eq!(sql, "SELECT 1");
}

#[test]
fn test_read_sql_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "SELECT * FROM users").unwrap();
    let sql = read_sql(&input(None, Some(file.path().to_path_buf()), false)).unwrap();
    assert_eq!(sql, "SELECT * FROM users");
}

#[test]
fn test_read_sql_missing_file() {
    let result = read_sql(&input(None, Some(PathBuf::from("/nonexistent/q.sql")), false));
    assert!(result.is_err());
}

#[test]
fn test_session_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("querylens.yml");
    std::fs::write(
        &path,
        "dialect: generic\nplatforms: [linux, darwin]\ninclude_virtual_tables: true\n",
    )
    .unwrap();

    let session = Session::load(&global(Some(path), None)).unwrap();
    assert_eq!(session.root, dir.path());
    assert_eq!(session.config.platforms.to_strings(), vec!["linux", "darwin"]);
    assert!(session.include_virtual(&input(None, None, false)));
    assert_eq!(
        session.parser(&global(None, None)).unwrap().dialect_name(),
        "generic"
    );
    assert_eq!(
        session
            .parser(&global(None, Some("sqlite")))
            .unwrap()
            .dialect_name(),
        "sqlite"
    );
}

#[test]
fn test_session_rejects_unknown_dialect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("querylens.yml");
    std::fs::write(&path, "include_virtual_tables: false\n").unwrap();

    let session = Session::load(&global(Some(path), None)).unwrap();
    assert!(!session.include_virtual(&input(None, None, false)));
    assert!(session.include_virtual(&input(None, None, true)));
    assert!(session.parser(&global(None, Some("oracle"))).is_err());
}

#[test]
fn test_missing_config_file_is_error() {
    let result = Session::load(&global(Some(PathBuf::from("/nonexistent/querylens.yml")), None));
    assert!(result.is_err());
}

#[test]
fn test_parse_failure_becomes_exit_code() {
    let err = AnalysisError::ParseError {
        message: "Expected: an SQL statement, found: SELECTx".to_string(),
        line: 1,
        column: 1,
    };
    let err = report_analysis_error(err);
    assert!(matches!(err.downcast_ref::<ExitCode>(), Some(ExitCode(1))));
}
