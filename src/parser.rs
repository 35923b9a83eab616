use serde::Serialize;
use thiserror::Error;

use crate::{
    ast::{AttributeTest, Combinator, Literal, Selector, Token},
    lexer::tokenize,
};

/// What went wrong while building a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Unexpected token")]
    UnexpectedToken,
    #[error("Unexpected end of selector")]
    UnexpectedEnd,
    #[error("Unexpected operator")]
    UnexpectedOperator,
    #[error("Unexpected keyword")]
    UnexpectedKeyword,
    #[error("Unexpected token in pseudo")]
    UnexpectedPseudo,
    #[error("Unterminated attribute")]
    UnterminatedAttribute,
    #[error("Unexpected token in attribute")]
    UnexpectedAttribute,
    #[error("Unexpected token in args")]
    UnexpectedArgs,
    #[error("Unexpected token for value")]
    UnexpectedValue,
}

/// A failed parse, with enough context to locate the problem without
/// re-lexing: the offending token (if any was left), every token after it,
/// and the expression tree built so far.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "{}: {}\nRemaining tokens: {}\nCurrent ast: {}",
    .kind,
    render(.token, false),
    render(.remaining, true),
    render(.partial, true)
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: Option<Token>,
    pub remaining: Vec<Token>,
    pub partial: Option<Selector>,
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.unwrap_or_default()
}

/// Recursive-descent parser over a token vector.
///
/// The tokens are never mutated; `position` is the cursor of the next token to
/// consume.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn error(
        &self,
        kind: ParseErrorKind,
        token: Option<Token>,
        partial: Option<&Selector>,
    ) -> ParseError {
        ParseError {
            kind,
            token,
            remaining: self.tokens[self.position..].to_vec(),
            partial: partial.cloned(),
        }
    }

    /// Parses every token, left-folding each consumed term into the tree.
    ///
    /// Returns `None` when there are no tokens at all.
    pub fn parse(&mut self) -> Result<Option<Selector>, ParseError> {
        let mut selector = None;
        while self.remaining() > 0 {
            selector = Some(self.consume_selector(selector)?);
        }
        log::debug!("parsed selector: {:?}", selector);
        Ok(selector)
    }

    /// Consumes one term, joining it onto `selector` when one exists.
    fn consume_selector(&mut self, selector: Option<Selector>) -> Result<Selector, ParseError> {
        let Some(token) = self.advance() else {
            return Err(self.error(ParseErrorKind::UnexpectedEnd, None, selector.as_ref()));
        };

        match token {
            Token::Wildcard if selector.is_none() => Ok(Selector::Wildcard),
            Token::Identifier(name) if selector.is_none() => Ok(Selector::Identifier { name }),
            Token::Operator(op) if self.remaining() > 0 => {
                if let Some(combinator) = Combinator::from_operator(&op) {
                    let right = self.consume_selector(None)?;
                    Ok(match selector {
                        Some(left) => Selector::combine(combinator, left, right),
                        None => right,
                    })
                } else if op == ":" {
                    let pseudo = self.consume_pseudo(selector.as_ref())?;
                    Ok(conjoin(selector, pseudo))
                } else if op == "[" {
                    let attribute = self.consume_attribute(selector.as_ref())?;
                    Ok(conjoin(selector, attribute))
                } else {
                    Err(self.error(
                        ParseErrorKind::UnexpectedOperator,
                        Some(Token::Operator(op)),
                        selector.as_ref(),
                    ))
                }
            }
            Token::Operator(op) if op == "[" => Err(self.error(
                ParseErrorKind::UnterminatedAttribute,
                Some(Token::Operator(op)),
                selector.as_ref(),
            )),
            token => Err(self.error(
                ParseErrorKind::UnexpectedToken,
                Some(token),
                selector.as_ref(),
            )),
        }
    }

    /// Consumes the keyword after `:`.
    fn consume_pseudo(&mut self, partial: Option<&Selector>) -> Result<Selector, ParseError> {
        match self.advance() {
            Some(Token::Keyword(keyword)) => match keyword.as_str() {
                "first-child" => Ok(Selector::nth_child(0)),
                "last-child" => Ok(Selector::nth_child(-1)),
                "nth-child" => Ok(Selector::NthChild {
                    index: self.consume_args(partial)?,
                }),
                _ => Err(self.error(
                    ParseErrorKind::UnexpectedKeyword,
                    Some(Token::Keyword(keyword)),
                    partial,
                )),
            },
            Some(token) => Err(self.error(ParseErrorKind::UnexpectedPseudo, Some(token), partial)),
            None => Err(self.error(ParseErrorKind::UnexpectedEnd, None, partial)),
        }
    }

    /// Consumes `name]` or `name=literal]` after `[`.
    fn consume_attribute(&mut self, partial: Option<&Selector>) -> Result<Selector, ParseError> {
        let name = match self.advance() {
            Some(Token::Identifier(name)) if self.remaining() > 0 => name,
            Some(token @ Token::Identifier(_)) => {
                return Err(self.error(
                    ParseErrorKind::UnterminatedAttribute,
                    Some(token),
                    partial,
                ));
            }
            token => {
                return Err(self.error(ParseErrorKind::UnexpectedAttribute, token, partial));
            }
        };

        match self.advance() {
            Some(Token::Operator(op)) if op == "]" => {
                Ok(Selector::attribute(name, AttributeTest::Exists))
            }
            Some(Token::Operator(op)) if op == "=" => {
                let value = self.consume_value(partial)?;
                let attribute = Selector::attribute(name, AttributeTest::Equal(value));

                match self.advance() {
                    Some(token) if token.is_operator("]") => Ok(attribute),
                    Some(token) => Err(self.error(
                        ParseErrorKind::UnexpectedAttribute,
                        Some(token),
                        Some(&attribute),
                    )),
                    None => Err(self.error(
                        ParseErrorKind::UnterminatedAttribute,
                        None,
                        Some(&attribute),
                    )),
                }
            }
            Some(op @ Token::Operator(_)) => {
                Err(self.error(ParseErrorKind::UnexpectedOperator, Some(op), partial))
            }
            token => Err(self.error(ParseErrorKind::UnexpectedAttribute, token, partial)),
        }
    }

    /// Consumes a parenthesized literal: `(`, literal, `)`.
    fn consume_args(&mut self, partial: Option<&Selector>) -> Result<Literal, ParseError> {
        match self.advance() {
            Some(token) if token.is_operator("(") && self.remaining() > 1 => {}
            token => return Err(self.error(ParseErrorKind::UnexpectedArgs, token, partial)),
        }

        let literal = self.consume_value(partial)?;

        match self.advance() {
            Some(token) if token.is_operator(")") => Ok(literal),
            token => Err(self.error(ParseErrorKind::UnexpectedValue, token, partial)),
        }
    }

    fn consume_value(&mut self, partial: Option<&Selector>) -> Result<Literal, ParseError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Literal::Number(n)),
            Some(Token::String(s)) => Ok(Literal::String(s)),
            token => Err(self.error(ParseErrorKind::UnexpectedValue, token, partial)),
        }
    }
}

fn conjoin(selector: Option<Selector>, term: Selector) -> Selector {
    match selector {
        Some(left) => Selector::and(left, term),
        None => term,
    }
}

/// Builds a selector from already lexed tokens.
pub fn process_tokens(tokens: Vec<Token>) -> Result<Option<Selector>, ParseError> {
    Parser::new(tokens).parse()
}

/// Lexes and parses a selector string.
///
/// An empty (or all-whitespace) selector has no expression and yields `None`.
///
/// # Examples
///
/// ```
/// use selectree::{Selector, parse};
///
/// let selector = parse("a > b").unwrap();
/// assert_eq!(
///     selector,
///     Some(Selector::Child {
///         left: Box::new(Selector::identifier("a")),
///         right: Box::new(Selector::identifier("b")),
///     })
/// );
/// ```
pub fn parse(selector: &str) -> Result<Option<Selector>, ParseError> {
    process_tokens(tokenize(selector))
}
