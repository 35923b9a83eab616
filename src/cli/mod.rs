//! CLI support for selectree
//!
//! Provides programmatic access to the CLI commands for embedding in other
//! tools.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, execute_check, selector_to_json, tokens_to_json};
pub use docs::{DocTopic, get_doc_topic, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Selector did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),
    /// JSON parsing or serialization error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'selectree docs' to see available topics.")]
    UnknownTopic(String),
}
