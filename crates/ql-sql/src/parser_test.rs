use super::*;

#[test]
fn test_parse_select() {
    let parser = SqlParser::sqlite();
    let nodes = parser
        .parse("SELECT uid, username FROM users WHERE uid = 0")
        .unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind(), "select");
}

#[test]
fn test_parse_multiple_statements() {
    let parser = SqlParser::sqlite();
    let nodes = parser.parse("SELECT 1; SELECT 2;").unwrap();
    assert_eq!(nodes.len(), 2);
}

#[test]
fn test_parse_empty() {
    let parser = SqlParser::sqlite();
    assert!(matches!(parser.parse(""), Err(SqlError::EmptySql)));
    assert!(matches!(parser.parse("  \n\t"), Err(SqlError::EmptySql)));
}

#[test]
fn test_parse_error() {
    let parser = SqlParser::sqlite();
    let result = parser.parse("SELECTx * FROM t");
    assert!(matches!(result, Err(SqlError::ParseError { .. })));
}

#[test]
fn test_from_dialect_name() {
    let parser = SqlParser::from_dialect_name("sqlite").unwrap();
    assert_eq!(parser.dialect_name(), "sqlite");

    let parser = SqlParser::from_dialect_name("Generic").unwrap();
    assert_eq!(parser.dialect_name(), "generic");

    let result = SqlParser::from_dialect_name("oracle");
    assert!(matches!(result, Err(SqlError::UnknownDialect(name)) if name == "oracle"));
}

#[test]
fn test_default_is_sqlite() {
    assert_eq!(SqlParser::default().dialect_name(), "sqlite");
    assert_eq!(SqlParser::default(), SqlParser::new(Dialect::Sqlite));
}

#[test]
fn test_dialect_matches_config_value() {
    assert_eq!(SqlParser::generic().dialect(), Dialect::Generic);
    assert_eq!(SqlParser::new(Dialect::Generic).dialect_name(), "generic");
}
