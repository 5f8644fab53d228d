//! Schema command implementation

use anyhow::{bail, Result};
use ql_core::{display_name, TableEntry};

use crate::cli::{GlobalArgs, SchemaArgs};
use crate::commands::common::Session;

/// Execute the schema command
pub fn execute(args: &SchemaArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::load(global)?;
    let state = session.install_catalog()?;

    if let Some(name) = &args.table {
        let Some(entry) = state.catalog.get(name) else {
            bail!("Table not found in schema: {}", name);
        };
        print_entry(entry);
        if let Some(description) = &entry.description {
            println!("  {}", description);
        }
        return Ok(());
    }

    for entry in state.catalog.entries() {
        print_entry(entry);
    }
    println!();
    println!("{} tables", state.catalog.len());

    Ok(())
}

fn print_entry(entry: &TableEntry) {
    let platforms: Vec<&str> = entry
        .platforms
        .iter()
        .map(|p| display_name(p.as_str()))
        .collect();
    let evented = if entry.evented { " (evented)" } else { "" };
    println!("{}{}: {}", entry.name, evented, platforms.join(", "));
}
