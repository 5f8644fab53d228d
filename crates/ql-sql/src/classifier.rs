//! Table classification over the syntax tree
//!
//! Every table-like name a statement mentions lands in one of three buckets:
//! real schema tables, virtual tables introduced by the query itself (WITH
//! items and subquery aliases), and table-valued function calls used in FROM.
//! Names compare ASCII case-insensitively, matching SQLite identifiers; the
//! first spelling seen is the one reported.

use serde::Serialize;

use crate::error::SqlResult;
use crate::parser::SqlParser;
use crate::tree::{AliasedNode, Node, WithItemNode};
use crate::visitor::visit_all;

/// The three table-name sets gathered from one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSets {
    /// Tables read from the schema, in first-seen order
    pub real: Vec<String>,
    /// Names defined by WITH items and subquery aliases
    pub virtual_tables: Vec<String>,
    /// Table-valued functions called in FROM
    pub function_tables: Vec<String>,
}

impl TableSets {
    /// Apply the exclusion rules and return the reportable table list.
    ///
    /// Names also defined as virtual tables are dropped unless
    /// `include_virtual` is set. Function tables are always dropped.
    pub fn resolve(&self, include_virtual: bool) -> Vec<String> {
        self.real
            .iter()
            .filter(|name| include_virtual || !contains_name(&self.virtual_tables, name))
            .filter(|name| !contains_name(&self.function_tables, name))
            .cloned()
            .collect()
    }
}

/// Classify every table-like name in `nodes`
pub fn classify(nodes: &[Node]) -> TableSets {
    let mut sets = TableSets::default();

    visit_all(nodes, |node, key| match (key, node) {
        ("with", Node::WithItem(WithItemNode { name, .. })) => {
            push_unique(&mut sets.virtual_tables, name.value());
        }
        ("from" | "left" | "right", Node::Aliased(AliasedNode { expr, alias })) => {
            match expr.as_ref() {
                Node::FunctionCall(call) => push_unique(&mut sets.function_tables, call.name.value()),
                _ => {
                    if let Some(alias) = alias {
                        push_unique(&mut sets.virtual_tables, alias);
                    }
                }
            }
        }
        ("from" | "left" | "right", Node::Table(table)) => {
            push_unique(&mut sets.real, &table.table);
        }
        _ => {}
    });

    sets
}

/// Parse `sql` with `parser` and return its reportable table list
pub fn extract_tables_from(
    parser: &SqlParser,
    sql: &str,
    include_virtual: bool,
) -> SqlResult<Vec<String>> {
    let nodes = parser.parse(sql)?;
    let sets = classify(&nodes);
    let tables = sets.resolve(include_virtual);

    log::debug!(
        "classified {} statement(s): real={:?} virtual={:?} function={:?} -> {:?}",
        nodes.len(),
        sets.real,
        sets.virtual_tables,
        sets.function_tables,
        tables
    );

    Ok(tables)
}

fn contains_name(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(name))
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !name.is_empty() && !contains_name(names, name) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
