use crate::interpreter::operator::{Operator, OperatorKind};

/// The class of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the line; the stream is exhausted.
    Eol,
    /// Not produced by the lexer; reserved for unclassified text.
    Invalid,
    /// A variable name such as `hello`.
    Identifier,
    /// A run of spaces and tabs.
    Whitespace,
    /// `set`
    Set,
    /// A run of decimal digits such as `42`.
    Number,
    /// A double-quoted string; the text is the unescaped content.
    String,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `for`
    For,
    /// `func`
    Function,
    /// `return`
    Return,
    /// Punctuation; the token carries an [`Operator`].
    Operator,
    /// `null`
    Nullable,
}

impl TokenKind {
    /// Looks up a reserved keyword.
    ///
    /// Returns `None` when `word` is an ordinary identifier.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("set"), Some(TokenKind::Set));
    /// assert_eq!(TokenKind::keyword("null"), Some(TokenKind::Nullable));
    /// assert_eq!(TokenKind::keyword("hello"), None);
    /// ```
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "func" => Some(Self::Function),
            "if" => Some(Self::If),
            "set" => Some(Self::Set),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "for" => Some(Self::For),
            "return" => Some(Self::Return),
            "null" => Some(Self::Nullable),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Eol => "End of line",
            Self::Invalid => "Invalid",
            Self::Identifier => "Identifier",
            Self::Whitespace => "Whitespace",
            Self::Set => "Set",
            Self::Number => "Number",
            Self::String => "String",
            Self::True => "True",
            Self::False => "False",
            Self::If => "If",
            Self::For => "For",
            Self::Function => "Function",
            Self::Return => "Return",
            Self::Operator => "Operator",
            Self::Nullable => "Null",
        };
        write!(f, "{name}")
    }
}

/// A classified lexical unit.
///
/// Two tokens are equal when their kind and text are equal; the attached
/// operator metadata is not compared.
#[derive(Debug, Clone)]
pub struct Token {
    /// The class of the token.
    pub kind:     TokenKind,
    /// The captured literal text.
    pub text:     String,
    /// Operator metadata, present only for [`TokenKind::Operator`].
    pub operator: Option<Operator>,
}

impl Token {
    /// Creates a token without operator metadata.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into(),
               operator: None }
    }

    /// Creates an operator token whose text is the operator's symbol.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::{
    ///     operator::{Operator, OperatorKind},
    ///     token::{Token, TokenKind},
    /// };
    ///
    /// let token = Token::operator(Operator::new(OperatorKind::NotEqual));
    /// assert_eq!(token, Token::new(TokenKind::Operator, "!="));
    /// ```
    #[must_use]
    pub fn operator(operator: Operator) -> Self {
        Self { kind:     TokenKind::Operator,
               text:     operator.symbol().to_string(),
               operator: Some(operator), }
    }

    /// The end-of-line marker that terminates every token stream.
    #[must_use]
    pub fn eol() -> Self {
        Self::new(TokenKind::Eol, "")
    }

    /// Returns the operator kind if this is an operator token.
    #[must_use]
    pub fn operator_kind(&self) -> Option<OperatorKind> {
        self.operator.map(|op| op.kind)
    }

    /// Returns `true` if this is an operator token of the given kind.
    #[must_use]
    pub fn is_operator(&self, kind: OperatorKind) -> bool {
        self.operator_kind() == Some(kind)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.operator) {
            (TokenKind::Operator, Some(op)) => write!(f, "{op}"),
            (TokenKind::Eol, _) => write!(f, "{}", self.kind),
            (kind, _) => write!(f, "{kind}('{}')", self.text),
        }
    }
}
