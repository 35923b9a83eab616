use serde::Serialize;

/// Compiled selector expression tree.
///
/// The tree is purely syntactic: it never references the document being
/// queried, so one parsed selector can be matched against many trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Selector {
    /// `*`, matches every node
    Wildcard,

    /// A bare name, matches nodes whose discriminant equals `name`
    ///
    /// # Example
    /// ```text
    /// VariableDeclaration
    /// ```
    Identifier { name: String },

    /// `left right`, `right` has some strict ancestor matching `left`
    Descendant {
        left: Box<Selector>,
        right: Box<Selector>,
    },

    /// `left > right`, the immediate parent of `right` matches `left`
    Child {
        left: Box<Selector>,
        right: Box<Selector>,
    },

    /// `left ~ right`, a later element of the same sequence
    Sibling {
        left: Box<Selector>,
        right: Box<Selector>,
    },

    /// `left + right`, the immediately following element of the same sequence
    Adjacent {
        left: Box<Selector>,
        right: Box<Selector>,
    },

    /// Implicit conjunction, e.g. `Foo[bar]` or `Foo:first-child`
    And {
        left: Box<Selector>,
        right: Box<Selector>,
    },

    /// Positional predicate; negative indices count from the end
    ///
    /// # Examples
    /// ```text
    /// :first-child      // index 0
    /// :last-child       // index -1
    /// :nth-child(2)
    /// ```
    NthChild { index: Literal },

    /// Property predicate on a dotted path
    ///
    /// # Examples
    /// ```text
    /// [body]
    /// [id.name="foo"]
    /// ```
    Attribute { name: String, test: AttributeTest },
}

/// Structural relationship named by a combinator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    Sibling,
    Adjacent,
}

impl Combinator {
    /// Maps an operator token value to its combinator.
    ///
    /// Any whitespace run is the descendant combinator.
    pub fn from_operator(op: &str) -> Option<Self> {
        match op {
            ">" => Some(Combinator::Child),
            "~" => Some(Combinator::Sibling),
            "+" => Some(Combinator::Adjacent),
            ws if !ws.is_empty() && ws.chars().all(char::is_whitespace) => {
                Some(Combinator::Descendant)
            }
            _ => None,
        }
    }
}

/// Test applied to the value found at an attribute path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeTest {
    /// `[name]`, the path resolves to a defined value
    Exists,
    /// `[name=literal]`, the resolved value is exactly the literal
    Equal(Literal),
}

/// Operand of positional and attribute predicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Literal {
    /// The literal as a sequence index, if it is an integral number.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Literal::Number(n) if n.fract() == 0.0 && n.is_finite() => Some(*n as i64),
            _ => None,
        }
    }
}

impl Selector {
    pub fn identifier(name: impl Into<String>) -> Self {
        Selector::Identifier { name: name.into() }
    }

    pub fn nth_child(index: i64) -> Self {
        Selector::NthChild {
            index: Literal::Number(index as f64),
        }
    }

    pub fn attribute(name: impl Into<String>, test: AttributeTest) -> Self {
        Selector::Attribute {
            name: name.into(),
            test,
        }
    }

    /// Joins two selectors with a structural combinator.
    pub fn combine(combinator: Combinator, left: Selector, right: Selector) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match combinator {
            Combinator::Descendant => Selector::Descendant { left, right },
            Combinator::Child => Selector::Child { left, right },
            Combinator::Sibling => Selector::Sibling { left, right },
            Combinator::Adjacent => Selector::Adjacent { left, right },
        }
    }

    /// Conjunction of two selectors.
    pub fn and(left: Selector, right: Selector) -> Self {
        Selector::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinator_mapping() {
        assert_eq!(Combinator::from_operator(" "), Some(Combinator::Descendant));
        assert_eq!(Combinator::from_operator("\t"), Some(Combinator::Descendant));
        assert_eq!(Combinator::from_operator(">"), Some(Combinator::Child));
        assert_eq!(Combinator::from_operator("~"), Some(Combinator::Sibling));
        assert_eq!(Combinator::from_operator("+"), Some(Combinator::Adjacent));
        assert_eq!(Combinator::from_operator("="), None);
        assert_eq!(Combinator::from_operator(""), None);
    }

    #[test]
    fn test_literal_index() {
        assert_eq!(Literal::Number(2.0).as_index(), Some(2));
        assert_eq!(Literal::Number(-1.0).as_index(), Some(-1));
        assert_eq!(Literal::Number(1.5).as_index(), None);
        assert_eq!(Literal::String("1".into()).as_index(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let selector = Selector::combine(
            Combinator::Child,
            Selector::identifier("a"),
            Selector::nth_child(0),
        );
        let json = serde_json::to_value(&selector).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "child",
                "left": {"type": "identifier", "name": "a"},
                "right": {"type": "nth-child", "index": 0.0}
            })
        );
    }
}
