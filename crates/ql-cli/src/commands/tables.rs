//! Tables command implementation

use anyhow::{Context, Result};
use ql_analysis::extract_tables_with;

use crate::cli::{GlobalArgs, TablesArgs, TablesOutput};
use crate::commands::common::{read_sql, report_analysis_error, Session};

/// Execute the tables command
pub fn execute(args: &TablesArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::load(global)?;
    let parser = session.parser(global)?;
    let sql = read_sql(&args.input)?;

    let tables = extract_tables_with(&parser, &sql, session.include_virtual(&args.input))
        .map_err(report_analysis_error)?;

    match args.output {
        TablesOutput::Text => {
            for table in &tables {
                println!("{}", table);
            }
        }
        TablesOutput::Json => {
            let json = serde_json::to_string(&tables).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
