// tests/lexer_tests.rs

use selectree::ast::Token;
use selectree::lexer::{Lexer, tokenize};

fn ident(s: &str) -> Token {
    Token::Identifier(s.to_string())
}

fn op(s: &str) -> Token {
    Token::Operator(s.to_string())
}

fn keyword(s: &str) -> Token {
    Token::Keyword(s.to_string())
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_child_absorbs_surrounding_whitespace() {
    assert_eq!(tokenize("a > b"), vec![ident("a"), op(">"), ident("b")]);
    assert_eq!(tokenize("a>b"), vec![ident("a"), op(">"), ident("b")]);
}

#[test]
fn test_structural_operators() {
    let test_cases = vec![
        ("a ~ b", "~"),
        ("a + b", "+"),
        ("a < b", "<"),
        ("a <= b", "<="),
        ("a = b", "="),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            tokenize(input),
            vec![ident("a"), op(expected), ident("b")],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_greater_equal_splits() {
    // `>` is tried before `>=`, so it never lexes as one operator.
    assert_eq!(
        tokenize("a >= b"),
        vec![ident("a"), op(">"), op("="), ident("b")]
    );
}

#[test]
fn test_whitespace_run_is_descendant_operator() {
    let tokens = tokenize("a \t  b");
    assert_eq!(tokens.len(), 3);
    match &tokens[1] {
        Token::Operator(ws) => assert!(ws.chars().all(char::is_whitespace)),
        other => panic!("expected whitespace operator, got {:?}", other),
    }
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    assert_eq!(tokenize("   Program \n"), vec![ident("Program")]);
}

#[test]
fn test_empty_selector() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("    ").is_empty());
}

// ============================================================================
// Terms
// ============================================================================

#[test]
fn test_wildcard() {
    assert_eq!(tokenize("*"), vec![Token::Wildcard]);
    // Whitespace before `*` is absorbed, so no descendant operator appears.
    assert_eq!(tokenize("a *"), vec![ident("a"), Token::Wildcard]);
}

#[test]
fn test_pseudo_class() {
    assert_eq!(tokenize(":first-child"), vec![op(":"), keyword("first-child")]);
    assert_eq!(
        tokenize("Foo:last-child"),
        vec![ident("Foo"), op(":"), keyword("last-child")]
    );
}

#[test]
fn test_nth_child_arguments() {
    assert_eq!(
        tokenize(":nth-child(-1)"),
        vec![
            op(":"),
            keyword("nth-child"),
            op("("),
            Token::Number(-1.0),
            op(")"),
        ]
    );
}

#[test]
fn test_keywords_match_by_substring() {
    assert_eq!(tokenize("lengthy"), vec![keyword("lengthy")]);
    assert_eq!(tokenize("calculate"), vec![keyword("calculate")]);
    assert_eq!(tokenize("x-first-child"), vec![keyword("x-first-child")]);
}

#[test]
fn test_attribute_tokens() {
    assert_eq!(
        tokenize(r#"[name="foo bar"]"#),
        vec![
            op("["),
            ident("name"),
            op("="),
            Token::String("foo bar".to_string()),
            op("]"),
        ]
    );
}

#[test]
fn test_dotted_path_is_one_identifier() {
    assert_eq!(
        tokenize("[id.name]"),
        vec![op("["), ident("id.name"), op("]")]
    );
}

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("[x=42]", 42.0),
        ("[x=-3]", -3.0),
        ("[x=+7]", 7.0),
        ("[x=1.5]", 1.5),
        ("[x=.25]", 0.25),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input);
        assert_eq!(tokens[3], Token::Number(expected), "Failed for input: {}", input);
    }
}

#[test]
fn test_digits_split_identifiers() {
    assert_eq!(tokenize("Decl1"), vec![ident("Decl"), Token::Number(1.0)]);
}

#[test]
fn test_string_ends_at_next_quote() {
    assert_eq!(
        tokenize(r#"[a="x"][b="y"]"#),
        vec![
            op("["),
            ident("a"),
            op("="),
            Token::String("x".to_string()),
            op("]"),
            op("["),
            ident("b"),
            op("="),
            Token::String("y".to_string()),
            op("]"),
        ]
    );
}

#[test]
fn test_backslash_is_not_an_escape() {
    let tokens = tokenize(r#"[a="x\"]"#);
    assert_eq!(tokens[3], Token::String(r"x\".to_string()));
}

#[test]
fn test_unrecognized_text_is_identifier() {
    assert_eq!(tokenize("#foo!"), vec![ident("#foo!")]);
}

#[test]
fn test_lexer_struct_matches_free_function() {
    let selector = "Program > VariableDeclaration:first-child";
    assert_eq!(Lexer::new(selector).tokenize(), tokenize(selector));
}

#[test]
fn test_tokens_serialize_with_type_and_value() {
    let json = serde_json::to_value(tokenize("* > a")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "wildcard", "value": "*"},
            {"type": "operator", "value": ">"},
            {"type": "identifier", "value": "a"}
        ])
    );
}
