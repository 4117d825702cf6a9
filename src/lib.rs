//! # setlang
//!
//! setlang is an interpreter for a small line-oriented expression language
//! written in Rust. It lexes, parses, and evaluates one line at a time with
//! support for variable declarations, assignment, arithmetic, and equality
//! over numbers, booleans, strings, and null.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ScriptError, session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types that
/// represent the syntactic structure of one input line as a tree. The AST is
/// built by the parser and traversed by the evaluator, and every node can be
/// printed as a readable tree dump.
pub mod ast;
/// Provides unified error types for lexing, parsing, evaluation and loading.
///
/// This module defines all errors that can be raised while running code. It
/// standardizes error reporting and carries the offending text or name for
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   script loader).
/// - Pairs pipeline failures with the script line they came from.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together operators, tokens, lexing, parsing, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Runs input lines against one persistent environment.
///
/// A session is what the REPL and the script runner drive: each line is
/// lexed, parsed and evaluated, and the variables it declares stay visible to
/// later lines.
pub mod session;
/// Loads scripts from disk.
pub mod source;
/// General helpers shared by several stages.
pub mod util;

/// Runs a multi-line script and returns the value of its last line.
///
/// Every non-blank line is evaluated in order in a fresh session. Blank
/// lines are skipped; a script with no code returns `Ok(None)`.
///
/// # Errors
/// Returns a [`ScriptError`] naming the first line that failed to lex,
/// parse, or evaluate.
///
/// # Examples
/// ```
/// use setlang::get_result;
///
/// let source = "set result = 2 + 2\nresult * 10";
/// assert_eq!(get_result(source).unwrap().as_deref(), Some("40"));
///
/// // Example with an intentional error (duplicate declaration).
/// let source = "set y = 1\nset y = 2";
/// let error = get_result(source).unwrap_err();
/// assert_eq!(error.line, 2);
/// ```
pub fn get_result(source: &str) -> Result<Option<String>, ScriptError> {
    Session::new().eval_source(source)
}
