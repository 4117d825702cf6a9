/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies the arithmetic and comparison coercion rules, and manages the
/// variable environment that persists between programs.
///
/// # Responsibilities
/// - Evaluates AST nodes, producing runtime values.
/// - Declares and assigns variables in one flat environment.
/// - Reports runtime errors such as duplicate declarations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces one token per call:
/// whitespace runs, operators, strings, numbers, keywords and identifiers.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Dispatches on the class of the next character.
/// - Combines `!` and `=` with a following `=` into two-character operators.
/// - Reports lexical errors for unknown characters and unterminated strings.
pub mod lexer;
/// Operator metadata.
///
/// Every punctuation token carries an [`operator::Operator`] describing its
/// kind, precedence and whether it may combine with the next character.
pub mod operator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`crate::ast::Program`] by recursive descent with one function per
/// precedence level.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Skips whitespace tokens between productions.
/// - Validates the grammar, reporting the offending token.
pub mod parser;
/// Token types produced by the lexer.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// Values are null, numbers, booleans and strings. This module also owns
/// the text rendering of values and their coercions between types.
pub mod value;
