use super::*;
use crate::tree::{AliasedNode, JoinNode, SelectNode, TableNode};

fn table(name: &str) -> Node {
    Node::Table(TableNode {
        schema: None,
        table: name.to_string(),
        alias: None,
    })
}

fn trace(roots: &[Node]) -> Vec<(String, String)> {
    let mut seen = Vec::new();
    visit_all(roots, |node, key| {
        let label = match node {
            Node::Table(t) => t.table.clone(),
            other => other.kind().to_string(),
        };
        seen.push((key.to_string(), label));
    });
    seen
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, l)| (k.to_string(), l.to_string()))
        .collect()
}

#[test]
fn test_root_has_empty_key() {
    let mut keys = Vec::new();
    visit(&table("users"), |_, key| keys.push(key.to_string()));
    assert_eq!(keys, vec![""]);
}

#[test]
fn test_list_elements_share_slot_key() {
    let select = Node::Select(Box::new(SelectNode {
        from: vec![table("a"), table("b")],
        ..SelectNode::default()
    }));
    assert_eq!(
        trace(&[select]),
        pairs(&[("", "select"), ("from", "a"), ("from", "b")])
    );
}

#[test]
fn test_pre_order_depth_first() {
    let join = Node::Join(JoinNode {
        left: Box::new(Node::Join(JoinNode {
            left: Box::new(table("a")),
            right: Box::new(table("b")),
            on: None,
        })),
        right: Box::new(Node::Aliased(AliasedNode {
            expr: Box::new(table("c")),
            alias: Some("x".into()),
        })),
        on: Some(Box::new(Node::leaf("literal"))),
    });
    assert_eq!(
        trace(&[join]),
        pairs(&[
            ("", "join"),
            ("left", "join"),
            ("left", "a"),
            ("right", "b"),
            ("right", "aliased"),
            ("expr", "c"),
            ("on", "literal"),
        ])
    );
}

#[test]
fn test_opaque_slots_are_walked() {
    let node = Node::opaque("expr", vec![("subqueries", vec![table("users")])]);
    assert_eq!(
        trace(&[node]),
        pairs(&[("", "expr"), ("subqueries", "users")])
    );
}

#[test]
fn test_empty_roots_visit_nothing() {
    assert!(trace(&[]).is_empty());
}

#[test]
fn test_multiple_roots_in_order() {
    assert_eq!(
        trace(&[table("a"), table("b")]),
        pairs(&[("", "a"), ("", "b")])
    );
}
