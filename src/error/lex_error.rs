#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing.
pub enum LexError {
    /// The input could not be turned into a token.
    WrongLexing {
        /// What the lexer found and why it was rejected.
        details: String,
    },
    /// A symbol was resolved as an operator but is not one.
    InvalidOperator {
        /// The rejected symbol.
        symbol: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLexing { details } => write!(f, "Wrong lexing: {details}."),
            Self::InvalidOperator { symbol } => {
                write!(f, "Operator: '{symbol}' is not allowed.")
            },
        }
    }
}

impl std::error::Error for LexError {}
