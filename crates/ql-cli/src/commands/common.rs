//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use ql_analysis::AnalysisError;
use ql_core::catalog::{self, CatalogState};
use ql_core::Config;
use ql_sql::SqlParser;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::{GlobalArgs, QueryInput};

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that destructors run before the process ends.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; the message was already printed.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Configuration with command-line overrides applied
pub(crate) struct Session {
    pub(crate) config: Config,
    /// Directory relative schema paths resolve against
    pub(crate) root: PathBuf,
}

impl Session {
    /// Load config from `--config` or the current directory, then apply
    /// `--schema` and `--dialect`
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let (mut config, root) = match &global.config {
            Some(path) => {
                let config = Config::load(path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?;
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (config, root)
            }
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                let config = Config::load_or_default(&cwd).context("Failed to load config")?;
                (config, cwd)
            }
        };

        if let Some(schema) = &global.schema {
            // Flag paths are relative to where the command runs, not the config
            let schema = std::env::current_dir()
                .map(|cwd| cwd.join(schema))
                .unwrap_or_else(|_| schema.clone());
            config.schema_path = Some(schema);
        }

        log::debug!(
            "dialect={} platforms=[{}] schema={}",
            global.dialect.as_deref().unwrap_or(config.dialect.as_str()),
            config.platforms.to_strings().join(", "),
            config
                .schema_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string())
        );

        Ok(Self { config, root })
    }

    /// Parser for `--dialect`, falling back to the configured dialect
    pub(crate) fn parser(&self, global: &GlobalArgs) -> Result<SqlParser> {
        match global.dialect.as_deref() {
            Some(name) => SqlParser::from_dialect_name(name).context("Invalid SQL dialect"),
            None => Ok(SqlParser::new(self.config.dialect)),
        }
    }

    /// Build the catalog and install it as the process-wide instance
    pub(crate) fn install_catalog(&self) -> Result<&'static CatalogState> {
        let state = self
            .config
            .load_catalog_state(&self.root)
            .context("Failed to load platform catalog")?;
        log::debug!("Loaded catalog with {} tables", state.catalog.len());
        catalog::install(state.catalog, state.platforms).context("Failed to install catalog")
    }

    /// Whether virtual table names should be reported
    pub(crate) fn include_virtual(&self, input: &QueryInput) -> bool {
        input.include_virtual || self.config.include_virtual_tables
    }
}

/// Read the query from the positional argument, `--file`, or stdin
pub(crate) fn read_sql(input: &QueryInput) -> Result<String> {
    if let Some(sql) = &input.sql {
        return Ok(sql.clone());
    }

    if let Some(path) = &input.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read SQL file: {}", path.display()));
    }

    let mut sql = String::new();
    std::io::stdin()
        .read_to_string(&mut sql)
        .context("Failed to read SQL from stdin")?;
    Ok(sql)
}

/// Print the parser's message as-is for parse failures and signal a
/// non-zero exit; other errors pass through with context
pub(crate) fn report_analysis_error(err: AnalysisError) -> anyhow::Error {
    match err.parser_message() {
        Some(message) => {
            eprintln!("{message}");
            ExitCode(1).into()
        }
        None => anyhow::Error::new(err).context("Failed to analyze query"),
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
