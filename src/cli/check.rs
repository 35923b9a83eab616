//! Run selectors against JSON input

use super::CliError;
use crate::{match_tree, parse, tokenize};

/// Options for the query command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The selector to run
    pub selector: String,
    /// JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The matched nodes, as a JSON array
    Success(serde_json::Value),
}

/// Parse the selector and, unless only checking syntax, match it against the
/// input document.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let selector = parse(&options.selector)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: serde_json::Value = serde_json::from_str(json_str)?;

    let matches = match_tree(&document, selector.as_ref());
    let output = matches.into_iter().cloned().collect();
    Ok(CheckResult::Success(serde_json::Value::Array(output)))
}

/// The token stream of a selector, as JSON.
pub fn tokens_to_json(selector: &str) -> Result<serde_json::Value, CliError> {
    Ok(serde_json::to_value(tokenize(selector))?)
}

/// The parsed expression tree of a selector, as JSON (`null` when empty).
pub fn selector_to_json(selector: &str) -> Result<serde_json::Value, CliError> {
    Ok(serde_json::to_value(parse(selector)?)?)
}
