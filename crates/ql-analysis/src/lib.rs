//! ql-analysis: table extraction and platform compatibility for SQL queries
//!
//! Composes the ql-sql classifier with the ql-core platform catalog.

pub mod compat;
pub mod error;
pub mod resolver;

pub use compat::{
    analyze_query, analyze_query_with, check_platform_compatibility,
    check_platform_compatibility_with, extract_tables, extract_tables_with, CompatibilityReport,
};
pub use error::{AnalysisError, AnalysisResult};
pub use resolver::{resolve_platforms, unknown_tables};
