pub mod ast;
pub mod cli;
pub mod lexer;
pub mod matcher;
pub mod node;
pub mod parser;
pub mod path;

pub use ast::{AttributeTest, Combinator, Literal, Selector, Token};
pub use lexer::{Lexer, tokenize};
pub use matcher::{Matcher, match_tree};
pub use node::{Edge, Node, visit_all, visit_pre};
pub use parser::{ParseError, ParseErrorKind, Parser, parse, process_tokens};

/// Parses `selector` and matches it against `tree`.
///
/// # Examples
///
/// ```
/// use selectree::{Node, query};
/// use serde_json::json;
///
/// let tree = json!({
///     "type": "Program",
///     "body": [{"type": "Decl_A"}, {"type": "Decl_B"}]
/// });
///
/// let matches = query(&tree, "Decl_A ~ Decl_B").unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].kind(), Some("Decl_B"));
/// ```
pub fn query<'a, N: Node>(tree: &'a N, selector: &str) -> Result<Vec<&'a N>, ParseError> {
    let selector = parse(selector)?;
    Ok(match_tree(tree, selector.as_ref()))
}
