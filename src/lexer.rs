use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Token;

/// Splits a selector into fragments. Each alternative captures what it keeps:
/// numbers, the pseudo-class colon, quoted strings, and punctuation (or a
/// single whitespace character) with the surrounding whitespace absorbed.
///
/// A quoted string ends at the next `"`; backslashes are not escapes.
static SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([+\-]?[0-9]*\.?[0-9]+)|(:)|("[^"]*")|\s*(\*|~|>|<=|>=|<|=|\+|\[|\]|\(|\)|\s)\s*"#)
        .expect("BUG: invalid SPLIT regex literal")
});

static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"first-child|nth-child|last-child|calc|length")
        .expect("BUG: invalid KEYWORD regex literal")
});

static STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"".*""#).expect("BUG: invalid STRING regex literal"));

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+\-]?[0-9]*\.?[0-9]+$").expect("BUG: invalid NUMBER regex literal")
});

static OPERATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"~|<=|>=|<|>|=|:|\+|\[|\]|\(|\)|\s")
        .expect("BUG: invalid OPERATOR regex literal")
});

/// Turns a selector string into classified tokens.
///
/// Lexing never fails: text that is not recognised as anything else becomes
/// an [`Token::Identifier`].
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.trim(),
        }
    }

    /// Splits the input and classifies every non-empty fragment.
    pub fn tokenize(&self) -> Vec<Token> {
        let tokens: Vec<Token> = self.fragments().into_iter().map(classify).collect();
        log::debug!("lexed {:?} into {} tokens", self.input, tokens.len());
        tokens
    }

    /// Text between separator matches, interleaved with the captured part of
    /// each separator, in input order. Empty fragments are dropped.
    fn fragments(&self) -> Vec<&'a str> {
        let input = self.input;
        let mut fragments = Vec::new();
        let mut last = 0;

        for caps in SPLIT.captures_iter(input) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            fragments.push(&input[last..whole.start()]);
            fragments.extend(caps.iter().skip(1).flatten().map(|m| m.as_str()));
            last = whole.end();
        }
        fragments.push(&input[last..]);

        fragments.retain(|fragment| !fragment.is_empty());
        fragments
    }
}

/// Classifies one fragment. Order matters: a fragment containing a keyword is a
/// keyword even if it would otherwise be an identifier.
fn classify(fragment: &str) -> Token {
    if fragment == "*" {
        return Token::Wildcard;
    }
    if KEYWORD.is_match(fragment) {
        return Token::Keyword(fragment.to_string());
    }
    if STRING.is_match(fragment) {
        let unquoted = fragment.strip_prefix('"').unwrap_or(fragment);
        let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
        return Token::String(unquoted.to_string());
    }
    if NUMBER.is_match(fragment) {
        if let Ok(n) = fragment.parse::<f64>() {
            return Token::Number(n);
        }
    }
    if OPERATOR.is_match(fragment) {
        return Token::Operator(fragment.to_string());
    }
    Token::Identifier(fragment.to_string())
}

/// Tokenizes a selector string.
///
/// # Examples
///
/// ```
/// use selectree::{Token, tokenize};
///
/// let tokens = tokenize("a > b");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Identifier("a".into()),
///         Token::Operator(">".into()),
///         Token::Identifier("b".into()),
///     ]
/// );
/// ```
pub fn tokenize(selector: &str) -> Vec<Token> {
    Lexer::new(selector).tokenize()
}

#[test]
fn test_descendant_whitespace() {
    let tokens = tokenize("a   b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Token::Operator(" ".to_string()));
}

#[test]
fn test_split_keeps_captures_in_order() {
    let lexer = Lexer::new("a:nth-child(2)");
    assert_eq!(lexer.fragments(), vec!["a", ":", "nth-child", "(", "2", ")"]);
}
