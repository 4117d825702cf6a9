use crate::error::LexError;

/// Result type used by operator resolution and the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The punctuation symbols of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `!`
    Not,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// Placeholder kind that no symbol resolves to.
    Invalid,
}

impl OperatorKind {
    /// Binding strength of the kind; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Star | Self::Slash => 6,
            Self::Plus | Self::Minus | Self::Not => 5,
            Self::LParen | Self::RParen => 4,
            Self::LBrace | Self::RBrace => 3,
            Self::Assign => 2,
            Self::Equal | Self::NotEqual => 1,
            Self::Invalid => 7,
        }
    }

    /// Whether the lexer should try to extend a symbol of this kind with the
    /// following character (`!` → `!=`, `=` → `==`).
    #[must_use]
    pub const fn is_overloadable(self) -> bool {
        matches!(self, Self::Not | Self::Assign)
    }

    /// The canonical source symbol of the kind.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Not => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Invalid => "<invalid>",
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Metadata attached to a punctuation token.
///
/// `precedence` and `overloadable` are derived from `kind` once, when the
/// operator is built, and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    /// Which symbol this is.
    pub kind:         OperatorKind,
    /// Binding strength; higher binds tighter.
    pub precedence:   u8,
    /// Whether a following character may combine with this one.
    pub overloadable: bool,
}

impl Operator {
    /// Builds the metadata for `kind`.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::operator::{Operator, OperatorKind};
    ///
    /// let star = Operator::new(OperatorKind::Star);
    /// assert_eq!(star.precedence, 6);
    /// assert!(!star.overloadable);
    /// ```
    #[must_use]
    pub const fn new(kind: OperatorKind) -> Self {
        Self { kind,
               precedence: kind.precedence(),
               overloadable: kind.is_overloadable() }
    }

    /// Resolves a one or two character symbol to an operator.
    ///
    /// # Errors
    /// Returns `LexError::InvalidOperator` if `symbol` is not an operator of
    /// the language.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::operator::{Operator, OperatorKind};
    ///
    /// assert_eq!(Operator::from_symbol("!=").unwrap().kind, OperatorKind::NotEqual);
    /// assert!(Operator::from_symbol("=!").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> LexResult<Self> {
        let kind = match symbol {
            "+" => OperatorKind::Plus,
            "-" => OperatorKind::Minus,
            "*" => OperatorKind::Star,
            "/" => OperatorKind::Slash,
            "(" => OperatorKind::LParen,
            ")" => OperatorKind::RParen,
            "{" => OperatorKind::LBrace,
            "}" => OperatorKind::RBrace,
            "=" => OperatorKind::Assign,
            "==" => OperatorKind::Equal,
            "!" => OperatorKind::Not,
            "!=" => OperatorKind::NotEqual,
            _ => {
                return Err(LexError::InvalidOperator { symbol: symbol.to_string() });
            },
        };

        Ok(Self::new(kind))
    }

    /// The canonical source symbol of this operator.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }
}

impl From<OperatorKind> for Operator {
    fn from(kind: OperatorKind) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operator('{}')", self.symbol())
    }
}
