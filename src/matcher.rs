use std::collections::HashSet;

use crate::{
    ast::{AttributeTest, Literal, Selector},
    node::{Edge, Node, holds, visit_all, visit_pre},
};

/// Identity set of nodes: membership is by address, never by value.
struct NodeSet<N> {
    members: HashSet<*const N>,
}

impl<N> NodeSet<N> {
    fn new(nodes: &[&N]) -> Self {
        NodeSet {
            members: nodes.iter().map(|node| *node as *const N).collect(),
        }
    }

    fn contains(&self, node: &N) -> bool {
        self.members.contains(&(node as *const N))
    }
}

/// Evaluates selectors against one tree.
///
/// Results borrow from the tree and are reported in pre-order encounter order.
pub struct Matcher<'a, N> {
    root: &'a N,
}

impl<'a, N: Node> Matcher<'a, N> {
    pub fn new(root: &'a N) -> Self {
        Matcher { root }
    }

    /// Every node of the tree matched by `selector`.
    pub fn find(&self, selector: &Selector) -> Vec<&'a N> {
        let matches = match selector {
            Selector::Wildcard => self.collect(|_| true),
            Selector::Identifier { name } => {
                self.collect(|node| node.kind() == Some(name.as_str()))
            }
            Selector::Descendant { left, right } => self.descendant(left, right),
            Selector::Child { left, right } => self.child(left, right),
            Selector::Sibling { left, right } => self.sibling(left, right),
            Selector::Adjacent { left, right } => self.adjacent(left, right),
            Selector::And { left, right } => {
                let right = NodeSet::new(&self.find(right));
                let mut matches = self.find(left);
                matches.retain(|node| right.contains(node));
                matches
            }
            Selector::NthChild { index } => self.nth_child(index),
            Selector::Attribute { name, test } => self.collect(|node| {
                let value = node.resolve(name);
                match test {
                    AttributeTest::Exists => value.is_some(),
                    AttributeTest::Equal(literal) => value.is_some_and(|v| v.equals(literal)),
                }
            }),
        };
        log::trace!("{} nodes matched {:?}", matches.len(), selector);
        matches
    }

    /// Nodes for which `predicate` holds, in traversal order.
    fn collect(&self, mut predicate: impl FnMut(&N) -> bool) -> Vec<&'a N> {
        let mut matches = Vec::new();
        visit_pre(self.root, (), &mut |node: &'a N, _| {
            if predicate(node) {
                matches.push(node);
            }
            None
        });
        matches
    }

    fn operands(&self, left: &Selector, right: &Selector) -> (NodeSet<N>, NodeSet<N>) {
        (
            NodeSet::new(&self.find(left)),
            NodeSet::new(&self.find(right)),
        )
    }

    /// The context is "somewhere below a left match"; once set it sticks for
    /// the whole subtree.
    fn descendant(&self, left: &Selector, right: &Selector) -> Vec<&'a N> {
        let (left, right) = self.operands(left, right);
        let mut matches = Vec::new();

        visit_pre(self.root, false, &mut |node: &'a N, under_left| {
            if under_left && right.contains(node) {
                matches.push(node);
            }
            left.contains(node).then_some(true)
        });
        matches
    }

    /// Every node resets the context to itself (if it matches `left`), so only
    /// the nearest enclosing node counts, and only when it holds the candidate
    /// directly rather than through a container.
    fn child(&self, left: &Selector, right: &Selector) -> Vec<&'a N> {
        let (left, right) = self.operands(left, right);
        let mut matches = Vec::new();

        visit_pre(self.root, None, &mut |node: &'a N, parent: Option<&'a N>| {
            if let Some(parent) = parent {
                if right.contains(node) && holds(parent, node) {
                    matches.push(node);
                }
            }
            Some(left.contains(node).then_some(node))
        });
        matches
    }

    /// For each left match in a sequence, the nearest later right match.
    fn sibling(&self, left: &Selector, right: &Selector) -> Vec<&'a N> {
        let (left, right) = self.operands(left, right);
        self.scan_sequences(|items, matches| {
            for (i, item) in items.iter().enumerate() {
                if !left.contains(item) {
                    continue;
                }
                if let Some(later) = items[i + 1..].iter().find(|later| right.contains(later)) {
                    matches.push(later);
                }
            }
        })
    }

    fn adjacent(&self, left: &Selector, right: &Selector) -> Vec<&'a N> {
        let (left, right) = self.operands(left, right);
        self.scan_sequences(|items, matches| {
            for pair in items.windows(2) {
                if left.contains(&pair[0]) && right.contains(&pair[1]) {
                    matches.push(&pair[1]);
                }
            }
        })
    }

    /// Picks one position out of every sequence in the tree. Negative indices
    /// count from the end; a position holding a non-node matches nothing.
    fn nth_child(&self, index: &Literal) -> Vec<&'a N> {
        let Some(index) = index.as_index() else {
            return Vec::new();
        };

        self.scan_sequences(|items, matches| {
            let len = items.len() as i64;
            let position = if index < 0 { len + index } else { index };
            if (0..len).contains(&position) {
                let item = &items[position as usize];
                if item.is_node() {
                    matches.push(item);
                }
            }
        })
    }

    /// Calls `scan` on every sequence in the tree, including sequences held by
    /// containers.
    fn scan_sequences(&self, mut scan: impl FnMut(&'a [N], &mut Vec<&'a N>)) -> Vec<&'a N> {
        let mut matches = Vec::new();
        visit_all(self.root, &mut |value: &'a N| {
            for edge in value.edges() {
                if let Edge::Sequence(items) = edge {
                    scan(items, &mut matches);
                }
            }
        });
        matches
    }
}

/// Matches a compiled selector against `tree`.
///
/// No selector matches nothing.
///
/// # Examples
///
/// ```
/// use selectree::{match_tree, parse};
/// use serde_json::json;
///
/// let tree = json!({"type": "Program", "body": [{"type": "A"}, {"type": "B"}]});
/// let selector = parse("Program > B").unwrap();
/// let matches = match_tree(&tree, selector.as_ref());
/// assert!(std::ptr::eq(matches[0], &tree["body"][1]));
/// ```
pub fn match_tree<'a, N: Node>(tree: &'a N, selector: Option<&Selector>) -> Vec<&'a N> {
    match selector {
        Some(selector) => Matcher::new(tree).find(selector),
        None => Vec::new(),
    }
}
