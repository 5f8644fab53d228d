//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Querylens - find the tables an osquery SQL query reads and the platforms it runs on
#[derive(Parser, Debug)]
#[command(name = "ql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: querylens.yml in the current directory)
    #[arg(short, long, global = true, env = "QUERYLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// osquery schema JSON to use instead of the configured or bundled one
    #[arg(short, long, global = true)]
    pub schema: Option<PathBuf>,

    /// Override SQL dialect (sqlite, generic)
    #[arg(short, long, global = true)]
    pub dialect: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the schema tables a query reads
    Tables(TablesArgs),

    /// List the platforms a query can run on
    Platforms(PlatformsArgs),

    /// Show catalog tables and their platforms
    Schema(SchemaArgs),
}

/// Where to read the query from
#[derive(Args, Debug, Clone)]
pub struct QueryInput {
    /// SQL text (read from --file or stdin when omitted)
    pub sql: Option<String>,

    /// Read SQL from a file
    #[arg(short, long, conflicts_with = "sql")]
    pub file: Option<PathBuf>,

    /// Report WITH and subquery alias names as tables too
    #[arg(long)]
    pub include_virtual: bool,
}

/// Arguments for the tables command
#[derive(Args, Debug)]
pub struct TablesArgs {
    #[command(flatten)]
    pub input: QueryInput,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: TablesOutput,
}

/// Tables output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablesOutput {
    /// One table per line
    Text,
    /// JSON array
    Json,
}

/// Arguments for the platforms command
#[derive(Args, Debug)]
pub struct PlatformsArgs {
    #[command(flatten)]
    pub input: QueryInput,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: PlatformsOutput,
}

/// Platforms output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformsOutput {
    /// One platform identifier per line
    Text,
    /// JSON report with tables, platforms and unknown tables
    Json,
    /// Human-readable summary with display names
    Pretty,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Show a single table
    #[arg(short, long)]
    pub table: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
