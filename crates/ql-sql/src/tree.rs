//! Syntax tree consumed by table classification
//!
//! Only the node shapes the classifier cares about are modelled explicitly.
//! Everything else is an [`OpaqueNode`] that carries its child slots so the
//! generic traversal in [`crate::visitor`] still reaches nested queries.

/// How an identifier was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentKind {
    /// Bare identifier
    #[default]
    Default,
    /// Quoted with `"`, `` ` `` or `[`
    Quoted,
}

/// A possibly-qualified name such as `users`, `main.users` or `u.uid`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierNode {
    /// Name parts in source order
    pub parts: Vec<String>,
    /// Quoting of the last part
    pub kind: IdentKind,
}

impl IdentifierNode {
    /// Single-part bare identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            parts: vec![value.into()],
            kind: IdentKind::Default,
        }
    }

    /// The unqualified name (last part)
    pub fn value(&self) -> &str {
        self.parts.last().map(String::as_str).unwrap_or("")
    }

    /// Dotted form of all parts
    pub fn qualified(&self) -> String {
        self.parts.join(".")
    }
}

/// SELECT with its query-level clauses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectNode {
    /// WITH items attached to this query
    pub with: Vec<Node>,
    /// Projection
    pub columns: Vec<Node>,
    /// FROM items, each a table, aliased expression, or join tree
    pub from: Vec<Node>,
    /// WHERE predicate
    pub selection: Option<Box<Node>>,
    /// GROUP BY expressions
    pub group_by: Vec<Node>,
    /// HAVING predicate
    pub having: Option<Box<Node>>,
    /// ORDER BY expressions
    pub order_by: Vec<Node>,
    /// LIMIT / OFFSET expressions
    pub limit: Vec<Node>,
}

/// Function invocation, either scalar or table-valued
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallNode {
    /// Function name path
    pub name: IdentifierNode,
    /// Argument expressions
    pub args: Vec<Node>,
}

/// An expression wrapped with an optional alias: a derived table, a
/// table-valued function in FROM, or an aliased projection item
#[derive(Debug, Clone, PartialEq)]
pub struct AliasedNode {
    /// Wrapped expression
    pub expr: Box<Node>,
    /// Alias, if one was given
    pub alias: Option<String>,
}

/// One `name AS (query)` item of a WITH clause
#[derive(Debug, Clone, PartialEq)]
pub struct WithItemNode {
    /// Name the item defines
    pub name: IdentifierNode,
    /// Defining query
    pub stmt: Box<Node>,
    /// Whether the WITH clause was `WITH RECURSIVE`
    pub recursive: bool,
}

/// Binary operator application
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpNode {
    /// Operator as written (`=`, `AND`, ...)
    pub op: String,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// Reference to a named table in FROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    /// Schema qualifier (`main` in `main.users`)
    pub schema: Option<String>,
    /// Table name
    pub table: String,
    /// Alias, if one was given
    pub alias: Option<String>,
}

/// Explicit join: `left JOIN right ON on`
#[derive(Debug, Clone, PartialEq)]
pub struct JoinNode {
    /// Left input, itself possibly a join
    pub left: Box<Node>,
    /// Right input
    pub right: Box<Node>,
    /// Join condition
    pub on: Option<Box<Node>>,
}

/// Any construct not modelled above, with its children grouped by slot name
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueNode {
    /// Short description of the construct (`literal`, `set_operation`, ...)
    pub kind: &'static str,
    /// Child slots in document order
    pub slots: Vec<(&'static str, Vec<Node>)>,
}

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Select(Box<SelectNode>),
    Identifier(IdentifierNode),
    FunctionCall(FunctionCallNode),
    Aliased(AliasedNode),
    WithItem(WithItemNode),
    BinaryOp(BinaryOpNode),
    Table(TableNode),
    Join(JoinNode),
    Opaque(OpaqueNode),
}

/// A child position of a node
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// Single child
    One(&'a Node),
    /// Ordered list of children sharing one key
    Many(&'a [Node]),
}

impl Node {
    /// Opaque node with no children
    pub fn leaf(kind: &'static str) -> Self {
        Node::Opaque(OpaqueNode {
            kind,
            slots: Vec::new(),
        })
    }

    /// Opaque node with the given child slots; empty slots are dropped
    pub fn opaque(kind: &'static str, slots: Vec<(&'static str, Vec<Node>)>) -> Self {
        Node::Opaque(OpaqueNode {
            kind,
            slots: slots
                .into_iter()
                .filter(|(_, nodes)| !nodes.is_empty())
                .collect(),
        })
    }

    /// Short name of the node's construct
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Select(_) => "select",
            Node::Identifier(_) => "identifier",
            Node::FunctionCall(_) => "function",
            Node::Aliased(_) => "aliased",
            Node::WithItem(_) => "with_item",
            Node::BinaryOp(_) => "binary_expr",
            Node::Table(_) => "table",
            Node::Join(_) => "join",
            Node::Opaque(opaque) => opaque.kind,
        }
    }

    /// Child slots keyed by the name the parent knows them by, in document order
    pub fn children(&self) -> Vec<(&'static str, Slot<'_>)> {
        match self {
            Node::Select(select) => {
                let mut slots = vec![
                    ("with", Slot::Many(&select.with)),
                    ("columns", Slot::Many(&select.columns)),
                    ("from", Slot::Many(&select.from)),
                ];
                if let Some(selection) = &select.selection {
                    slots.push(("where", Slot::One(selection)));
                }
                slots.push(("groupby", Slot::Many(&select.group_by)));
                if let Some(having) = &select.having {
                    slots.push(("having", Slot::One(having)));
                }
                slots.push(("orderby", Slot::Many(&select.order_by)));
                slots.push(("limit", Slot::Many(&select.limit)));
                slots
            }
            Node::Identifier(_) | Node::Table(_) => Vec::new(),
            Node::FunctionCall(call) => vec![("args", Slot::Many(&call.args))],
            Node::Aliased(aliased) => vec![("expr", Slot::One(&aliased.expr))],
            Node::WithItem(item) => vec![("stmt", Slot::One(&item.stmt))],
            Node::BinaryOp(op) => vec![("left", Slot::One(&op.left)), ("right", Slot::One(&op.right))],
            Node::Join(join) => {
                let mut slots = vec![("left", Slot::One(&join.left)), ("right", Slot::One(&join.right))];
                if let Some(on) = &join.on {
                    slots.push(("on", Slot::One(on)));
                }
                slots
            }
            Node::Opaque(opaque) => opaque
                .slots
                .iter()
                .map(|(key, nodes)| (*key, Slot::Many(nodes.as_slice())))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
