/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that no token
/// starts with, strings that never close, and symbols that are not operators.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from a token stream, such as tokens in the wrong grammar position or an
/// assignment whose left side is not a variable.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// declaring a variable twice or assigning to one that was never declared.
pub mod runtime_error;
/// Script loading errors.
///
/// Raised by the source file loader when a file cannot be read or a requested
/// line does not exist.
pub mod source_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use source_error::SourceError;

/// Any failure of the lex → parse → evaluate pipeline for one input line.
///
/// The set of kinds is closed so that drivers can match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The line could not be split into tokens.
    Lex(LexError),
    /// The tokens did not form a valid program.
    Parse(ParseError),
    /// The program failed while being evaluated.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

/// A pipeline failure tied to the line of a multi-line script it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    /// The 1-based line that failed.
    pub line:  usize,
    /// What went wrong on that line.
    pub error: Error,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
