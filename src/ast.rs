//! # Selector Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the compiled expression tree of the
//! selector language, a small structural query language for JSON syntax trees
//! in the spirit of CSS selectors.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Classified fragments produced by the lexer
//! - **[selector]** - The selector expression tree built by the parser
//!
//! ## Quick Start
//!
//! ```text
//! FunctionDeclaration > Identifier[name="main"]
//! ```
//!
//! This selector finds every `Identifier` node named `main` whose immediate
//! parent is a `FunctionDeclaration`.
//!
//! ## Core Concepts
//!
//! ### Terms
//!
//! - `*` - any node
//! - `Name` - nodes whose `type` equals `Name`
//! - `:first-child`, `:last-child`, `:nth-child(n)` - position within a sequence
//! - `[path]`, `[path=literal]` - property existence or equality
//!
//! ### Combinators
//!
//! - `a b` - descendant
//! - `a > b` - child
//! - `a ~ b` - later sibling
//! - `a + b` - adjacent sibling
//!
//! Terms written back to back without a combinator are conjoined:
//! `Literal[value=1]:first-child`.
pub mod selector;
pub mod tokens;

pub use selector::{AttributeTest, Combinator, Literal, Selector};
pub use tokens::Token;
