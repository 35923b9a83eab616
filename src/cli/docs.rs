//! Documentation content for the selectree CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Syntax,
    Combinators,
    Pseudo,
    Attributes,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "syntax" => Some(Self::Syntax),
            "combinators" | "combinator" => Some(Self::Combinators),
            "pseudo" | "pseudo-classes" | "positions" => Some(Self::Pseudo),
            "attributes" | "attribute" | "attrs" => Some(Self::Attributes),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"SELECTREE DOCUMENTATION

Selectree finds nodes in JSON syntax trees (ESTree and similar) with a small
CSS-like selector language. A node is any JSON object with a string "type".

DOCUMENTATION TOPICS

  syntax            Terms, conjunction, and how selectors are tokenized
  combinators       Descendant, child, sibling, and adjacent combinators
  pseudo            :first-child, :last-child, and :nth-child(n)
  attributes        [path] and [path=literal] property tests

QUICK REFERENCE

  *                 Any node
  Name              Nodes whose type is Name
  a b               b somewhere below a
  a > b             b directly below a
  a ~ b             b later in the same list as a
  a + b             b right after a in the same list
  :first-child      First element of a list
  [id.name="x"]     Property equality

Run 'selectree doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Syntax) => Ok(SYNTAX_DOC),
        Some(DocTopic::Combinators) => Ok(COMBINATORS_DOC),
        Some(DocTopic::Pseudo) => Ok(PSEUDO_DOC),
        Some(DocTopic::Attributes) => Ok(ATTRIBUTES_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Terms and Conjunction

WILDCARD
  *
    Matches every node in the tree, in pre-order.

TYPE
  Name
    Matches nodes whose "type" property equals Name.

    Example:
      Input:  {"type": "Program", "body": [{"type": "EmptyStatement"}]}
      Query:  EmptyStatement
      Output: [{"type": "EmptyStatement"}]

CONJUNCTION
  Name[attr]:first-child
    Terms written without whitespace between them must all match the same
    node.

TOKENIZING
  Whitespace around * > ~ + [ ] ( ) = is absorbed. Any other whitespace run
  between two terms is the descendant combinator, so "a :first-child" and
  "a:first-child" mean different things.

  Constraints:
    - A type or * cannot follow another term without a combinator; since
      whitespace before * is absorbed, write "a > *" rather than "a *"
    - Strings are double-quoted and end at the next quote (no escapes)
"#;

const COMBINATORS_DOC: &str = r#"COMBINATORS - Structural Relationships

DESCENDANT
  a b
    b has an ancestor (at any depth) matching a.

CHILD
  a > b
    b's immediate parent node matches a.

SIBLING
  a ~ b
    In any list property, for each element matching a the nearest later
    element matching b.

ADJACENT
  a + b
    In any list property, the element directly after one matching a, if it
    matches b.

  Combinators fold left: "a > b c" is "(a > b) c".
"#;

const PSEUDO_DOC: &str = r#"PSEUDO - Positions Within Lists

  :first-child      Element 0 of every list property in the tree
  :last-child       Last element of every list property
  :nth-child(n)     Element n (zero-based); negative n counts from the end

    Example:
      Input:  {"type": "Program", "body": [{"type": "A"}, {"type": "B"}]}
      Query:  :nth-child(-1)
      Output: [{"type": "B"}]

  Constraints:
    - n must be an integer literal; anything else matches nothing
    - Out of range positions match nothing
"#;

const ATTRIBUTES_DOC: &str = r#"ATTRIBUTES - Property Tests

EXISTENCE
  [path]
    The dotted path resolves on the node. A present null counts.

EQUALITY
  [path=literal]
    The resolved value strictly equals a number or "string" literal.

    Example:
      Input:  {"type": "Identifier", "name": "main"}
      Query:  Identifier[name="main"]

PATHS
  id.name         Nested object properties

  Constraints:
    - Path segments containing digits are split by the tokenizer, so list
      indices cannot be written in a selector path
"#;
