//! Error types for ql-core

use thiserror::Error;

/// Core error type for Querylens
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Schema file not found
    #[error("[C003] Schema file not found: {path}")]
    SchemaNotFound { path: String },

    /// C004: Schema file could not be decoded
    #[error("[C004] Failed to parse schema: {message}")]
    SchemaParseError { message: String },

    /// C005: Schema entry is structurally invalid
    #[error("[C005] Invalid schema entry at index {index}: {reason}")]
    SchemaInvalidEntry { index: usize, reason: String },

    /// C006: Canonical platform list is empty or contains duplicates
    #[error("[C006] Invalid platform list: {reason}")]
    InvalidPlatforms { reason: String },

    /// C007: The process-wide catalog has already been installed
    #[error("[C007] Platform catalog is already installed for this process")]
    CatalogAlreadyInstalled,

    /// C008: IO error with file path context
    #[error("[C008] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C009: YAML parse error
    #[error("[C009] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
