//! ql-core - Core library for Querylens
//!
//! This crate provides platform identifiers, the canonical platform ordering,
//! the table-to-platform catalog (and its process-wide instance), and
//! configuration parsing shared by all Querylens components.

pub mod catalog;
pub mod config;
pub mod error;
mod newtype_string;
pub mod platform;

pub use catalog::{CatalogState, PlatformCatalog, TableEntry};
pub use config::{Config, Dialect};
pub use error::{CoreError, CoreResult};
pub use platform::{display_name, CanonicalPlatforms, Platform, DEFAULT_PLATFORMS};
