//! ql-sql - SQL parsing layer for Querylens
//!
//! Parses SQL with sqlparser-rs, adapts the result into a small tagged-union
//! tree, and classifies the table names a query mentions.

pub mod adapter;
pub mod classifier;
pub mod dialect;
pub mod error;
pub mod parser;
pub mod tree;
pub mod visitor;

pub use classifier::{classify, extract_tables_from, TableSets};
pub use dialect::dialect_from_name;
pub use error::{SqlError, SqlResult};
pub use parser::SqlParser;
pub use tree::{Node, Slot};
pub use visitor::{visit, visit_all};
