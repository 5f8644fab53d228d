//! Dialect selection and parser error mapping

use ql_core::Dialect;
use sqlparser::ast::Statement;
use sqlparser::dialect::{GenericDialect, SQLiteDialect};
use sqlparser::parser::{Parser, ParserError};

use crate::error::{SqlError, SqlResult};

/// Look up a dialect by its config name, ignoring case
pub fn dialect_from_name(name: &str) -> SqlResult<Dialect> {
    match name.to_ascii_lowercase().as_str() {
        "sqlite" => Ok(Dialect::Sqlite),
        "generic" => Ok(Dialect::Generic),
        _ => Err(SqlError::UnknownDialect(name.to_string())),
    }
}

/// Parse `sql` with the grammar of `dialect`
pub fn parse_with(dialect: Dialect, sql: &str) -> SqlResult<Vec<Statement>> {
    let parsed = match dialect {
        Dialect::Sqlite => Parser::parse_sql(&SQLiteDialect {}, sql),
        Dialect::Generic => Parser::parse_sql(&GenericDialect {}, sql),
    };
    parsed.map_err(parse_error)
}

/// Keep the parser's text as the message; the position comes from its
/// trailing "Line: N, Column: M", or 0 when there is none.
fn parse_error(err: ParserError) -> SqlError {
    let message = err.to_string();
    let (line, column) = error_position(&message).unwrap_or((0, 0));
    SqlError::ParseError {
        message,
        line,
        column,
    }
}

fn error_position(message: &str) -> Option<(usize, usize)> {
    let (_, position) = message.rsplit_once("Line: ")?;
    let (line, rest) = position.split_once(", Column: ")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    Some((line.trim().parse().ok()?, rest[..digits].parse().ok()?))
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
