use crate::util::num::render_number;

/// Arithmetic operators of a [`Expression::Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Equality operators of a [`Expression::Comparison`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
        }
    }
}

/// The root of a syntax tree: the top-level statements of one input, in
/// source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The statements, evaluated first to last.
    pub body: Vec<Statement>,
}

impl Program {
    /// Creates a program from its statements.
    #[must_use]
    pub const fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

/// A node that can appear at the top level of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested program; evaluates to its last statement.
    Program(Program),
    /// `set <name> [= <value>]`.
    VariableDeclaration {
        /// Name of the declared variable.
        name:  String,
        /// Initial value; [`Expression::Null`] when none was written.
        value: Expression,
    },
    /// An expression used as a statement.
    Expression(Expression),
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

/// An abstract syntax tree node that produces a value.
///
/// Every node owns its children; the tree has no shared or back references.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a variable by name.
    Identifier(String),
    /// A numeric literal.
    Number(f64),
    /// A string literal, already unescaped.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`
    Null,
    /// Whitespace that ended up in expression position.
    Whitespace(String),
    /// Logical negation. The parser never builds it and the evaluator
    /// rejects it.
    Not(Box<Self>),
    /// Arithmetic on two operands.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `==` or `!=` on two operands.
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `<name> = <value>`.
    VariableAssign {
        /// Name of the assigned variable.
        name:  String,
        /// The new value.
        value: Box<Self>,
    },
}

impl Expression {
    /// Builds a [`Expression::Binary`] node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Builds a [`Expression::Comparison`] node.
    #[must_use]
    pub fn comparison(left: Self, op: ComparisonOperator, right: Self) -> Self {
        Self::Comparison { left: Box::new(left),
                           op,
                           right: Box::new(right) }
    }

    /// Builds a [`Expression::VariableAssign`] node.
    #[must_use]
    pub fn assign(name: impl Into<String>, value: Self) -> Self {
        Self::VariableAssign { name:  name.into(),
                               value: Box::new(value), }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Program {{")?;
        for statement in &self.body {
            writeln!(f, "  {statement}")?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Program(program) => write!(f, "{program}"),
            Self::VariableDeclaration { name, value } => {
                write!(f, "VariableDeclaration({name} = {value})")
            },
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "Identifier({name})"),
            Self::Number(value) => write!(f, "Number({})", render_number(*value)),
            Self::String(text) => write!(f, "String({text:?})"),
            Self::Boolean(value) => write!(f, "Boolean({value})"),
            Self::Null => write!(f, "Null"),
            Self::Whitespace(text) => write!(f, "Whitespace({text:?})"),
            Self::Not(inner) => write!(f, "Not({inner})"),
            Self::Binary { left, op, right } => write!(f, "Binary({left} {op} {right})"),
            Self::Comparison { left, op, right } => {
                write!(f, "Comparison({left} {op} {right})")
            },
            Self::VariableAssign { name, value } => write!(f, "VariableAssign({name} = {value})"),
        }
    }
}
