//! CLI command implementations

pub(crate) mod common;
pub(crate) mod platforms;
pub(crate) mod schema;
pub(crate) mod tables;
