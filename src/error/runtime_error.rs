#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to declare a variable that already exists.
    VariableAlreadyDeclared {
        /// The name of the variable.
        name: String,
    },
    /// Tried to assign to a variable that was never declared.
    VariableDoesNotExist {
        /// The name of the variable.
        name: String,
    },
    /// Tried to read a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Reached a syntax node the evaluator has no rule for.
    UnexpectedStatement {
        /// A rendering of the offending node.
        node: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableAlreadyDeclared { name } => {
                write!(f, "Variable '{name}' is already declared.")
            },
            Self::VariableDoesNotExist { name } => {
                write!(f, "Variable '{name}' is not declared, hence not assignable.")
            },
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::UnexpectedStatement { node } => {
                write!(f, "Unimplemented statement in evaluation: {node}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
