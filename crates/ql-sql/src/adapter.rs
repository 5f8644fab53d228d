//! Translation from sqlparser's AST into the classifier's [`Node`] tree
//!
//! FROM items, joins, WITH items, function calls, binary operators and
//! identifiers get dedicated node shapes. Constructs without one become
//! opaque nodes holding their outermost nested queries, so every table
//! reference inside a statement remains reachable by traversal.

use sqlparser::ast::{
    Cte, Expr, Function, FunctionArg, FunctionArgExpr, FunctionArguments, GroupByExpr, Ident,
    JoinConstraint, JoinOperator, LimitClause, ObjectName, ObjectNamePart, OrderByKind, Query,
    Select, SelectItem, SetExpr, Statement, TableFactor, TableWithJoins, Visit, Visitor,
};
use std::ops::ControlFlow;

use crate::tree::{
    AliasedNode, BinaryOpNode, FunctionCallNode, IdentKind, IdentifierNode, JoinNode, Node,
    SelectNode, TableNode, WithItemNode,
};

/// Adapt every parsed statement, preserving order
pub fn adapt_statements(statements: &[Statement]) -> Vec<Node> {
    statements.iter().map(adapt_statement).collect()
}

/// Adapt a single statement
pub fn adapt_statement(statement: &Statement) -> Node {
    match statement {
        Statement::Query(query) => adapt_query(query),
        other => Node::opaque("statement", vec![("subqueries", nested_queries(other))]),
    }
}

/// Adapt a query: WITH clause, body, ORDER BY and LIMIT
pub fn adapt_query(query: &Query) -> Node {
    let with: Vec<Node> = query
        .with
        .as_ref()
        .map(|with| {
            with.cte_tables
                .iter()
                .map(|cte| adapt_cte(cte, with.recursive))
                .collect()
        })
        .unwrap_or_default();

    let order_by: Vec<Node> = query
        .order_by
        .as_ref()
        .map(|order_by| match &order_by.kind {
            OrderByKind::Expressions(exprs) => exprs.iter().map(|e| adapt_expr(&e.expr)).collect(),
            _ => Vec::new(),
        })
        .unwrap_or_default();

    let limit: Vec<Node> = match &query.limit_clause {
        Some(LimitClause::LimitOffset { limit, offset, .. }) => limit
            .iter()
            .map(adapt_expr)
            .chain(offset.iter().map(|o| adapt_expr(&o.value)))
            .collect(),
        Some(LimitClause::OffsetCommaLimit { offset, limit }) => {
            vec![adapt_expr(offset), adapt_expr(limit)]
        }
        None => Vec::new(),
    };

    match query.body.as_ref() {
        SetExpr::Select(select) => {
            let mut node = adapt_select(select);
            node.with = with;
            node.order_by = order_by;
            node.limit = limit;
            Node::Select(Box::new(node))
        }
        body => Node::opaque(
            "query",
            vec![
                ("with", with),
                ("body", vec![adapt_set_expr(body)]),
                ("orderby", order_by),
                ("limit", limit),
            ],
        ),
    }
}

fn adapt_cte(cte: &Cte, recursive: bool) -> Node {
    Node::WithItem(WithItemNode {
        name: ident_node(&cte.alias.name),
        stmt: Box::new(adapt_query(&cte.query)),
        recursive,
    })
}

fn adapt_set_expr(set_expr: &SetExpr) -> Node {
    match set_expr {
        SetExpr::Select(select) => Node::Select(Box::new(adapt_select(select))),
        SetExpr::Query(query) => adapt_query(query),
        SetExpr::SetOperation { left, right, .. } => Node::opaque(
            "set_operation",
            vec![
                ("left", vec![adapt_set_expr(left)]),
                ("right", vec![adapt_set_expr(right)]),
            ],
        ),
        other => Node::opaque("set_expr", vec![("subqueries", nested_queries(other))]),
    }
}

fn adapt_select(select: &Select) -> SelectNode {
    let columns = select
        .projection
        .iter()
        .map(|item| match item {
            SelectItem::UnnamedExpr(expr) => adapt_expr(expr),
            SelectItem::ExprWithAlias { expr, alias } => Node::Aliased(AliasedNode {
                expr: Box::new(adapt_expr(expr)),
                alias: Some(alias.value.clone()),
            }),
            SelectItem::QualifiedWildcard(..) | SelectItem::Wildcard(_) => Node::leaf("star"),
            #[allow(unreachable_patterns)]
            other => Node::opaque("select_item", vec![("subqueries", nested_queries(other))]),
        })
        .collect();

    let group_by = match &select.group_by {
        GroupByExpr::Expressions(exprs, _) => exprs.iter().map(adapt_expr).collect(),
        _ => Vec::new(),
    };

    SelectNode {
        with: Vec::new(),
        columns,
        from: select.from.iter().map(adapt_table_with_joins).collect(),
        selection: select.selection.as_ref().map(|e| Box::new(adapt_expr(e))),
        group_by,
        having: select.having.as_ref().map(|e| Box::new(adapt_expr(e))),
        order_by: Vec::new(),
        limit: Vec::new(),
    }
}

/// Fold `a JOIN b JOIN c` into a left-deep tree of [`JoinNode`]s
fn adapt_table_with_joins(table_with_joins: &TableWithJoins) -> Node {
    let mut tree = adapt_table_factor(&table_with_joins.relation);
    for join in &table_with_joins.joins {
        tree = Node::Join(JoinNode {
            left: Box::new(tree),
            right: Box::new(adapt_table_factor(&join.relation)),
            on: adapt_join_condition(&join.join_operator).map(Box::new),
        });
    }
    tree
}

fn adapt_join_condition(operator: &JoinOperator) -> Option<Node> {
    let constraint = match operator {
        JoinOperator::Join(c)
        | JoinOperator::Inner(c)
        | JoinOperator::Left(c)
        | JoinOperator::LeftOuter(c)
        | JoinOperator::Right(c)
        | JoinOperator::RightOuter(c)
        | JoinOperator::FullOuter(c) => c,
        other => {
            let subqueries = nested_queries(other);
            return (!subqueries.is_empty())
                .then(|| Node::opaque("join_constraint", vec![("subqueries", subqueries)]));
        }
    };

    match constraint {
        JoinConstraint::On(expr) => Some(adapt_expr(expr)),
        _ => None,
    }
}

fn adapt_table_factor(factor: &TableFactor) -> Node {
    match factor {
        TableFactor::Table {
            name, alias, args, ..
        } => {
            let alias = alias.as_ref().map(|a| a.name.value.clone());
            let name = object_name_node(name);
            match args {
                // `FROM json_each(x)` parses as a table with arguments
                Some(args) => Node::Aliased(AliasedNode {
                    expr: Box::new(Node::FunctionCall(FunctionCallNode {
                        name,
                        args: args.args.iter().map(adapt_function_arg).collect(),
                    })),
                    alias,
                }),
                None => {
                    let mut parts = name.parts;
                    let table = parts.pop().unwrap_or_default();
                    Node::Table(TableNode {
                        schema: parts.pop(),
                        table,
                        alias,
                    })
                }
            }
        }
        TableFactor::Derived {
            subquery, alias, ..
        } => Node::Aliased(AliasedNode {
            expr: Box::new(adapt_query(subquery)),
            alias: alias.as_ref().map(|a| a.name.value.clone()),
        }),
        TableFactor::TableFunction { expr, alias, .. } => Node::Aliased(AliasedNode {
            expr: Box::new(adapt_expr(expr)),
            alias: alias.as_ref().map(|a| a.name.value.clone()),
        }),
        TableFactor::Function {
            name, args, alias, ..
        } => Node::Aliased(AliasedNode {
            expr: Box::new(Node::FunctionCall(FunctionCallNode {
                name: object_name_node(name),
                args: args.iter().map(adapt_function_arg).collect(),
            })),
            alias: alias.as_ref().map(|a| a.name.value.clone()),
        }),
        // SQLite has no alias on a parenthesised join; treat it as the join itself
        TableFactor::NestedJoin {
            table_with_joins, ..
        } => adapt_table_with_joins(table_with_joins),
        other => Node::opaque("table_factor", vec![("subqueries", nested_queries(other))]),
    }
}

fn adapt_expr(expr: &Expr) -> Node {
    match expr {
        Expr::Identifier(ident) => Node::Identifier(ident_node(ident)),
        Expr::CompoundIdentifier(idents) => Node::Identifier(IdentifierNode {
            parts: idents.iter().map(|i| i.value.clone()).collect(),
            kind: idents.last().map(ident_kind).unwrap_or_default(),
        }),
        Expr::BinaryOp { left, op, right } => Node::BinaryOp(BinaryOpNode {
            op: op.to_string(),
            left: Box::new(adapt_expr(left)),
            right: Box::new(adapt_expr(right)),
        }),
        Expr::Nested(inner) => adapt_expr(inner),
        Expr::Function(func) => Node::FunctionCall(adapt_function(func)),
        Expr::Subquery(query) => adapt_query(query),
        Expr::Value(_) => Node::leaf("literal"),
        other => Node::opaque("expr", vec![("subqueries", nested_queries(other))]),
    }
}

fn adapt_function(func: &Function) -> FunctionCallNode {
    let args = match &func.args {
        FunctionArguments::List(arg_list) => {
            arg_list.args.iter().map(adapt_function_arg).collect()
        }
        FunctionArguments::Subquery(query) => vec![adapt_query(query)],
        FunctionArguments::None => Vec::new(),
    };
    FunctionCallNode {
        name: object_name_node(&func.name),
        args,
    }
}

fn adapt_function_arg(arg: &FunctionArg) -> Node {
    let arg_expr = match arg {
        FunctionArg::Unnamed(e)
        | FunctionArg::Named { arg: e, .. }
        | FunctionArg::ExprNamed { arg: e, .. } => e,
    };
    match arg_expr {
        FunctionArgExpr::Expr(expr) => adapt_expr(expr),
        FunctionArgExpr::QualifiedWildcard(_) | FunctionArgExpr::Wildcard => Node::leaf("star"),
    }
}

fn ident_kind(ident: &Ident) -> IdentKind {
    if ident.quote_style.is_some() {
        IdentKind::Quoted
    } else {
        IdentKind::Default
    }
}

fn ident_node(ident: &Ident) -> IdentifierNode {
    IdentifierNode {
        parts: vec![ident.value.clone()],
        kind: ident_kind(ident),
    }
}

fn object_name_node(name: &ObjectName) -> IdentifierNode {
    let mut kind = IdentKind::Default;
    let parts = name
        .0
        .iter()
        .map(|part| match part {
            ObjectNamePart::Identifier(ident) => {
                kind = ident_kind(ident);
                ident.value.clone()
            }
            #[allow(unreachable_patterns)]
            other => {
                kind = IdentKind::Default;
                other.to_string()
            }
        })
        .collect();
    IdentifierNode { parts, kind }
}

/// Collects the outermost queries nested anywhere inside an AST fragment
#[derive(Default)]
struct OutermostQueries {
    depth: usize,
    found: Vec<Query>,
}

impl Visitor for OutermostQueries {
    type Break = ();

    fn pre_visit_query(&mut self, query: &Query) -> ControlFlow<Self::Break> {
        if self.depth == 0 {
            self.found.push(query.clone());
        }
        self.depth += 1;
        ControlFlow::Continue(())
    }

    fn post_visit_query(&mut self, _query: &Query) -> ControlFlow<Self::Break> {
        self.depth = self.depth.saturating_sub(1);
        ControlFlow::Continue(())
    }
}

fn nested_queries<V: Visit>(fragment: &V) -> Vec<Node> {
    let mut collector = OutermostQueries::default();
    let _ = fragment.visit(&mut collector);
    collector.found.iter().map(adapt_query).collect()
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
