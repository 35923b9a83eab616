use serde::{Serialize, Serializer, ser::SerializeMap};

/// A classified fragment of a selector string.
///
/// Tokens never carry position information. Serialized as
/// `{"type": "...", "value": ...}`, which is the shape parse errors print.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Universal selector
    ///
    /// # Examples
    /// ```text
    /// *
    /// ```
    Wildcard,

    /// Pseudo-class keyword
    ///
    /// Any fragment containing one of `first-child`, `nth-child`,
    /// `last-child`, `calc` or `length` lexes as a keyword.
    ///
    /// # Examples
    /// ```text
    /// first-child
    /// nth-child
    /// ```
    Keyword(String),

    /// String literal with its surrounding quotes stripped
    ///
    /// # Examples
    /// ```text
    /// "foo"
    /// "item #1"
    /// ```
    String(String),

    /// Signed, optionally fractional number
    ///
    /// # Examples
    /// ```text
    /// 2
    /// -1
    /// +0.5
    /// ```
    Number(f64),

    /// Structural punctuation
    ///
    /// A whitespace run between two terms is kept as an operator whose value
    /// is the whitespace itself; the parser reads it as the descendant
    /// combinator.
    ///
    /// # Examples
    /// ```text
    /// >  ~  +  :  [  ]  (  )  =  <  <=  >=
    /// ```
    Operator(String),

    /// Anything else: node discriminants and attribute paths
    ///
    /// # Examples
    /// ```text
    /// Program
    /// loc.start.line
    /// ```
    Identifier(String),
}

impl Token {
    fn type_name(&self) -> &'static str {
        match self {
            Token::Wildcard => "wildcard",
            Token::Keyword(_) => "keyword",
            Token::String(_) => "string",
            Token::Number(_) => "number",
            Token::Operator(_) => "operator",
            Token::Identifier(_) => "identifier",
        }
    }

    /// True when this is the operator token with exactly `value`.
    pub fn is_operator(&self, value: &str) -> bool {
        matches!(self, Token::Operator(op) if op == value)
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.type_name())?;
        match self {
            Token::Wildcard => map.serialize_entry("value", "*")?,
            Token::Number(n) => map.serialize_entry("value", n)?,
            Token::Keyword(value)
            | Token::String(value)
            | Token::Operator(value)
            | Token::Identifier(value) => map.serialize_entry("value", value)?,
        }
        map.end()
    }
}
