//! Dotted property paths, as used by attribute selectors.
//!
//! A path such as `id.name` steps through nested properties one segment at a
//! time. Resolution stops with `None` at the first missing segment.

use serde_json::Value;

use crate::ast::Literal;

/// What an attribute path resolved to, as far as a selector can compare it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Number(f64),
    String(&'a str),
    /// Booleans, null, arrays and objects. They exist but never equal a
    /// literal.
    Other,
}

impl AttributeValue<'_> {
    /// Strict equality: same primitive type and same value.
    pub fn equals(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (AttributeValue::Number(a), Literal::Number(b)) => a == b,
            (AttributeValue::String(a), Literal::String(b)) => *a == b.as_str(),
            _ => false,
        }
    }
}

impl<'a> From<&'a Value> for AttributeValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(AttributeValue::Other, AttributeValue::Number),
            Value::String(s) => AttributeValue::String(s),
            _ => AttributeValue::Other,
        }
    }
}

/// Follows `path` from `value`.
///
/// Object segments are property names; on arrays a segment may be a
/// non-negative index. A present `null` counts as resolved.
///
/// # Examples
///
/// ```
/// use selectree::path::resolve_path;
/// use serde_json::json;
///
/// let node = json!({"id": {"name": "main"}, "params": [{"name": "argc"}]});
/// assert_eq!(resolve_path(&node, "id.name"), Some(&json!("main")));
/// assert_eq!(resolve_path(&node, "params.0.name"), Some(&json!("argc")));
/// assert_eq!(resolve_path(&node, "id.kind"), None);
/// ```
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
