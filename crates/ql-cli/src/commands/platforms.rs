//! Platforms command implementation

use anyhow::{Context, Result};
use ql_analysis::{analyze_query_with, CompatibilityReport};
use ql_core::display_name;

use crate::cli::{GlobalArgs, PlatformsArgs, PlatformsOutput};
use crate::commands::common::{read_sql, report_analysis_error, Session};

/// Execute the platforms command
pub fn execute(args: &PlatformsArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::load(global)?;
    let parser = session.parser(global)?;
    let state = session.install_catalog()?;
    let sql = read_sql(&args.input)?;

    let report = analyze_query_with(&parser, state, &sql, session.include_virtual(&args.input))
        .map_err(report_analysis_error)?;

    match args.output {
        PlatformsOutput::Text => {
            for platform in &report.platforms {
                println!("{}", platform);
            }
        }
        PlatformsOutput::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
        PlatformsOutput::Pretty => print_pretty(&report),
    }

    Ok(())
}

fn print_pretty(report: &CompatibilityReport) {
    println!("Tables:");
    if report.tables.is_empty() {
        println!("  (none)");
    } else {
        for table in &report.tables {
            println!("  - {}", table);
        }
    }

    println!();
    println!("Compatible platforms:");
    if report.platforms.is_empty() {
        println!("  (none)");
    } else {
        for platform in &report.platforms {
            println!("  - {} ({})", display_name(platform), platform);
        }
    }

    if !report.unknown_tables.is_empty() {
        println!();
        println!("Not in schema: {}", report.unknown_tables.join(", "));
    }
}
