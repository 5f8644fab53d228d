//! SQL parser wrapper

use ql_core::Dialect;
use sqlparser::ast::Statement;

use crate::adapter::adapt_statements;
use crate::dialect::{dialect_from_name, parse_with};
use crate::error::{SqlError, SqlResult};
use crate::tree::Node;

/// SQL parser that wraps sqlparser-rs with dialect support
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlParser {
    dialect: Dialect,
}

impl SqlParser {
    /// Create a parser for `dialect`
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Create a new parser with SQLite dialect
    pub fn sqlite() -> Self {
        Self::new(Dialect::Sqlite)
    }

    /// Create a new parser with the generic dialect
    pub fn generic() -> Self {
        Self::new(Dialect::Generic)
    }

    /// Create a parser from dialect name
    pub fn from_dialect_name(name: &str) -> SqlResult<Self> {
        dialect_from_name(name).map(Self::new)
    }

    /// Parse SQL into sqlparser statements
    pub fn parse_statements(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }

        parse_with(self.dialect, sql)
    }

    /// Parse SQL into one tree per statement
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Node>> {
        let statements = self.parse_statements(sql)?;
        Ok(adapt_statements(&statements))
    }

    /// The dialect this parser uses
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Get the dialect name
    pub fn dialect_name(&self) -> &'static str {
        self.dialect.as_str()
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
