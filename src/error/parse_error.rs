#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
    },
    /// The left side of `=` is not a variable name.
    InvalidAssignmentTarget {
        /// The rejected left-hand expression.
        target: String,
    },
    /// A digit run could not be read as a number.
    InvalidNumber {
        /// The literal text.
        literal: String,
    },
    /// The token stream ended without an end-of-line marker.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Unexpected token: expected {expected}, got {found}.")
            },
            Self::InvalidAssignmentTarget { target } => {
                write!(f, "Cannot assign to {target}, only variables can be assigned.")
            },
            Self::InvalidNumber { literal } => write!(f, "Invalid number literal '{literal}'."),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
