//! Error types for ql-sql

use thiserror::Error;

/// SQL parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// SQL parse error (S001)
    ///
    /// `message` is the parser's own text, unmodified.
    #[error("[S001] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] SQL is empty")]
    EmptySql,

    /// Unknown dialect name (S003)
    #[error("[S003] Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}

impl SqlError {
    /// The parser's message for a parse failure, suitable for showing to the
    /// person who wrote the query
    pub fn parser_message(&self) -> Option<&str> {
        match self {
            SqlError::ParseError { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
