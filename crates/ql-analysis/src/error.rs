//! Error types for ql-analysis

use ql_sql::SqlError;
use thiserror::Error;

/// Analysis error type
///
/// Every way a query can fail to parse is reported as [`AnalysisError::ParseError`]
/// so callers deal with a single shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// AE001: the query could not be parsed
    #[error("[AE001] {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// AE002: SQL layer error unrelated to the query text
    #[error("[AE002] SQL error: {0}")]
    Sql(SqlError),
}

impl AnalysisError {
    /// The parser's message, unmodified, for parse failures
    pub fn parser_message(&self) -> Option<&str> {
        match self {
            AnalysisError::ParseError { message, .. } => Some(message),
            AnalysisError::Sql(_) => None,
        }
    }
}

impl From<SqlError> for AnalysisError {
    fn from(err: SqlError) -> Self {
        match err {
            SqlError::ParseError {
                message,
                line,
                column,
            } => AnalysisError::ParseError {
                message,
                line,
                column,
            },
            SqlError::EmptySql => AnalysisError::ParseError {
                message: "SQL is empty".to_string(),
                line: 0,
                column: 0,
            },
            other => AnalysisError::Sql(other),
        }
    }
}

/// Result type alias for AnalysisError
pub type AnalysisResult<T> = Result<T, AnalysisError>;
