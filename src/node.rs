//! The shape of a tree the matcher can walk.
//!
//! A node has a discriminant (its kind) and named properties. The matcher only
//! needs to know, for each property in a fixed order, whether it holds a nested
//! node, an ordered sequence, or a scalar it can skip.
//!
//! Sequence elements that are not nodes (plain objects, nested arrays) are
//! containers: the walk passes through them to reach the nodes they hold, but
//! they are never reported themselves.

use serde_json::Value;

use crate::path::{AttributeValue, resolve_path};

/// Property of the discriminant on JSON nodes.
pub const KIND_FIELD: &str = "type";

/// A traversal-relevant property value.
#[derive(Debug)]
pub enum Edge<'a, N> {
    /// A nested node
    Node(&'a N),
    /// An ordered sequence; elements that are not nodes are walked through
    /// and still count towards positions
    Sequence(&'a [N]),
}

/// Capability a document type exposes to be queried.
///
/// Implementations must return edges in a stable order; that order is the
/// order matches are reported in.
pub trait Node: Sized {
    /// The discriminant, or `None` if this value is not a node.
    fn kind(&self) -> Option<&str>;

    /// Nested nodes and sequences, in property order.
    ///
    /// Also called on containers that are not nodes, to reach what they hold.
    fn edges(&self) -> impl Iterator<Item = Edge<'_, Self>>;

    /// Resolves a dotted property path against this node.
    fn resolve(&self, path: &str) -> Option<AttributeValue<'_>>;

    fn is_node(&self) -> bool {
        self.kind().is_some()
    }
}

impl Node for Value {
    fn kind(&self) -> Option<&str> {
        self.get(KIND_FIELD).and_then(Value::as_str)
    }

    fn edges(&self) -> impl Iterator<Item = Edge<'_, Self>> {
        let nested = self
            .as_array()
            .map(|items| Edge::Sequence(items.as_slice()));

        let properties = self
            .as_object()
            .into_iter()
            .flat_map(|map| map.values())
            .filter_map(|value| match value {
                Value::Array(items) => Some(Edge::Sequence(items.as_slice())),
                Value::Object(_) if value.is_node() => Some(Edge::Node(value)),
                _ => None,
            });

        nested.into_iter().chain(properties)
    }

    fn resolve(&self, path: &str) -> Option<AttributeValue<'_>> {
        resolve_path(self, path).map(AttributeValue::from)
    }
}

/// Pre-order walk that threads a context down the tree.
///
/// `visitor` is called on every node before its children. Returning
/// `Some(context)` replaces the context for that node's subtree; returning
/// `None` passes the incoming context through unchanged. Containers are not
/// shown to `visitor` and pass their context through.
pub fn visit_pre<'a, N, C, F>(node: &'a N, context: C, visitor: &mut F)
where
    N: Node,
    C: Copy,
    F: FnMut(&'a N, C) -> Option<C>,
{
    let context = if node.is_node() {
        visitor(node, context).unwrap_or(context)
    } else {
        context
    };

    for edge in node.edges() {
        match edge {
            Edge::Node(child) => visit_pre(child, context, visitor),
            Edge::Sequence(items) => {
                for item in items {
                    visit_pre(item, context, visitor);
                }
            }
        }
    }
}

/// Pre-order walk over every value the tree holds, containers included.
pub fn visit_all<'a, N, F>(value: &'a N, visitor: &mut F)
where
    N: Node,
    F: FnMut(&'a N),
{
    visitor(value);

    for edge in value.edges() {
        match edge {
            Edge::Node(child) => visit_all(child, visitor),
            Edge::Sequence(items) => {
                for item in items {
                    visit_all(item, visitor);
                }
            }
        }
    }
}

/// True when `node` is held directly by `parent`, as a property or as an
/// element of one of its sequences.
pub fn holds<N: Node>(parent: &N, node: &N) -> bool {
    parent.edges().any(|edge| match edge {
        Edge::Node(child) => std::ptr::eq(child, node),
        Edge::Sequence(items) => items.iter().any(|item| std::ptr::eq(item, node)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_objects_are_not_nodes() {
        let tree = json!({
            "type": "Program",
            "loc": {"start": {"type": 1}},
            "body": [{"type": "A"}, 3, null, {"type": "B"}],
        });
        let mut seen = Vec::new();
        visit_pre(&tree, (), &mut |node: &Value, _| {
            seen.push(node.kind().unwrap_or("?").to_string());
            None
        });
        assert_eq!(seen, vec!["Program", "A", "B"]);
    }

    #[test]
    fn test_walks_through_containers() {
        let tree = json!({
            "type": "ObjectExpression",
            "properties": [{"key": {"type": "Identifier", "name": "k"}}],
            "nested": [[{"type": "Literal"}], 4],
        });
        let mut seen = Vec::new();
        visit_pre(&tree, (), &mut |node: &Value, _| {
            seen.push(node.kind().unwrap_or("?").to_string());
            None
        });
        assert_eq!(seen, vec!["ObjectExpression", "Identifier", "Literal"]);

        let mut values = 0;
        visit_all(&tree, &mut |_: &Value| values += 1);
        // root, wrapper object, Identifier, inner array, Literal, 4
        assert_eq!(values, 6);
    }

    #[test]
    fn test_holds_only_direct_children() {
        let tree = json!({
            "type": "Program",
            "body": [{"type": "A"}, {"wrap": {"type": "B"}}],
            "head": {"type": "C"},
        });
        assert!(holds(&tree, &tree["body"][0]));
        assert!(holds(&tree, &tree["head"]));
        assert!(!holds(&tree, &tree["body"][1]["wrap"]));
    }

    #[test]
    fn test_context_inherits_and_overrides() {
        let tree = json!({
            "type": "Root",
            "left": {"type": "Mark", "child": {"type": "Leaf"}},
            "right": {"type": "Leaf"},
        });
        let mut depths = Vec::new();
        visit_pre(&tree, 0u8, &mut |node: &Value, marked| {
            depths.push((node.kind().unwrap_or("?").to_string(), marked));
            (node.kind() == Some("Mark")).then_some(1)
        });
        assert_eq!(
            depths,
            vec![
                ("Root".to_string(), 0),
                ("Mark".to_string(), 0),
                ("Leaf".to_string(), 1),
                ("Leaf".to_string(), 0),
            ]
        );
    }
}
