use super::*;

#[test]
fn test_dialect_from_name() {
    assert_eq!(dialect_from_name("sqlite").unwrap(), Dialect::Sqlite);
    assert_eq!(dialect_from_name("GENERIC").unwrap(), Dialect::Generic);
    assert!(matches!(
        dialect_from_name("oracle"),
        Err(SqlError::UnknownDialect(name)) if name == "oracle"
    ));
}

#[test]
fn test_parse_each_dialect() {
    let stmts = parse_with(Dialect::Sqlite, "SELECT * FROM users").unwrap();
    assert_eq!(stmts.len(), 1);

    let stmts = parse_with(Dialect::Generic, "SELECT * FROM users; SELECT 1").unwrap();
    assert_eq!(stmts.len(), 2);
}

#[test]
fn test_parse_error_keeps_parser_message() {
    let sql = "SELECTx * FROM t";
    let raw = Parser::parse_sql(&SQLiteDialect {}, sql).unwrap_err().to_string();
    match parse_with(Dialect::Sqlite, sql).unwrap_err() {
        SqlError::ParseError { message, .. } => assert_eq!(message, raw),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_parse_error_position() {
    let (line, column, message) =
        match parse_with(Dialect::Sqlite, "SELECT *\nFROM users WHERE )").unwrap_err() {
            SqlError::ParseError {
                line,
                column,
                message,
            } => (line, column, message),
            other => panic!("expected ParseError, got {:?}", other),
        };
    assert_eq!(line, 2, "message: {}", message);
    assert!(column > 0, "message: {}", message);
}

#[test]
fn test_error_position() {
    assert_eq!(
        error_position("Expected: something at Line: 5, Column: 10"),
        Some((5, 10))
    );
    assert_eq!(error_position("Some error without location"), None);
    assert_eq!(error_position("at Line: x, Column: 3"), None);
}
