//! Depth-first traversal over the syntax tree
//!
//! The callback sees every node exactly once, pre-order, together with the
//! key of the slot it was reached through. Roots are reported with an empty
//! key. List slots pass their own key to every element, so each table in a
//! `FROM a, b` list is reported under `from`.

use crate::tree::{Node, Slot};

/// Visit `root` and all of its descendants in document order.
pub fn visit<'a, F>(root: &'a Node, mut callback: F)
where
    F: FnMut(&'a Node, &str),
{
    walk(root, "", &mut callback);
}

/// Visit every root in `roots`, in order. An empty slice visits nothing.
pub fn visit_all<'a, F>(roots: &'a [Node], mut callback: F)
where
    F: FnMut(&'a Node, &str),
{
    for root in roots {
        walk(root, "", &mut callback);
    }
}

fn walk<'a, F>(node: &'a Node, parent_key: &str, callback: &mut F)
where
    F: FnMut(&'a Node, &str),
{
    callback(node, parent_key);

    for (key, slot) in node.children() {
        match slot {
            Slot::One(child) => walk(child, key, callback),
            Slot::Many(children) => {
                for child in children {
                    walk(child, key, callback);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "visitor_test.rs"]
mod tests;
