/// Entry points of the parser.
///
/// Defines the result type shared by the parser modules, the top-level
/// [`core::produce_ast`] that turns a token stream into a program, and the
/// expression entry point every nested production starts from.
pub mod core;

/// Binary-operator precedence levels.
///
/// One function per level, from assignment (loosest) down to multiplication
/// (tightest). Each level parses its operands with the next tighter level.
pub mod binary;

/// Primary expressions.
///
/// Literals, variable names, parenthesised expressions and sign-folded
/// numbers.
pub mod primary;

/// Statement parsing.
///
/// Variable declarations and expression statements.
pub mod statement;

/// Helpers shared by the parser modules.
pub mod utils;
