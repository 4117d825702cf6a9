use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        operator::{LexResult, Operator},
        token::{Token, TokenKind},
    },
};

/// Raw lexical units recognised by character class.
///
/// The first character of the remaining input decides which variant
/// matches; callbacks finish the multi-character cases.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
enum Lexeme {
    /// Embedded NUL, treated like the end of the input.
    #[token("\0")]
    Sentinel,
    /// A tab or space followed by any further whitespace.
    #[regex(r"[ \t][ \t\n\r\x0B\x0C]*", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
    })]
    Whitespace,
    /// Punctuation, possibly extended to a two-character operator.
    #[regex(r"[!()*+\-/={}]", read_operator)]
    Operator(Operator),
    /// A double-quoted string with `\"` unescaped.
    #[token("\"", read_string)]
    Str(String),
    /// A run of decimal digits.
    #[regex(r"[0-9]+")]
    Number,
    /// A letter followed by letters and digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Word,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Failure raised inside the raw lexer, before it knows the offending text.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexFault {
    /// No lexeme starts with the current character.
    #[default]
    Unrecognized,
    /// The input ended before the closing quote.
    UnterminatedString(String),
    /// The punctuation did not resolve to an operator.
    InvalidOperator(String),
}

impl LexFault {
    fn into_lex_error(self, slice: &str) -> LexError {
        match self {
            Self::Unrecognized => {
                LexError::WrongLexing { details: format!("Token: '{slice}' is not allowed") }
            },
            Self::UnterminatedString(partial) => {
                LexError::WrongLexing { details: format!("Ending double quote not found after \"{partial}\"") }
            },
            Self::InvalidOperator(symbol) => LexError::InvalidOperator { symbol },
        }
    }
}

/// Reads one operator and, when it is overloadable, tries to extend it with
/// the next character.
///
/// The second character is only consumed when the combined symbol is itself
/// an operator; otherwise the single-character operator stands.
fn read_operator(lex: &mut logos::Lexer<Lexeme>) -> Result<Operator, LexFault> {
    let symbol = lex.slice();
    let single = Operator::from_symbol(symbol).map_err(|_| {
                                                  LexFault::InvalidOperator(symbol.to_string())
                                              })?;
    if !single.overloadable {
        return Ok(single);
    }

    let Some(next) = lex.remainder().chars().next() else {
        return Ok(single);
    };

    let mut combined = symbol.to_string();
    combined.push(next);

    match Operator::from_symbol(&combined) {
        Ok(extended) => {
            lex.bump(next.len_utf8());
            Ok(extended)
        },
        Err(_) => Ok(single),
    }
}

/// Reads the body of a string after its opening quote.
///
/// A quote closes the string unless the last character collected so far is a
/// backslash, in which case the backslash is replaced by the quote.
fn read_string(lex: &mut logos::Lexer<Lexeme>) -> Result<String, LexFault> {
    let mut text = String::new();
    let mut consumed = 0;
    let mut newlines = 0;

    for ch in lex.remainder().chars() {
        consumed += ch.len_utf8();
        match ch {
            '\0' => break,
            '"' if !text.ends_with('\\') => {
                lex.bump(consumed);
                lex.extras.line += newlines;
                return Ok(text);
            },
            '"' => {
                text.pop();
            },
            '\n' => newlines += 1,
            _ => {},
        }
        text.push(ch);
    }

    Err(LexFault::UnterminatedString(text))
}

/// Produces one [`Token`] per call from a line of source text.
///
/// The lexer keeps no state between calls apart from its position in the
/// input and the line counter. Once the input is exhausted every call
/// returns an [`TokenKind::Eol`] token.
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Lexeme>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:     Lexeme::lexer_with_extras(source, LexerExtras { line: 1 }),
               exhausted: false, }
    }

    /// The line the lexer is currently on, starting at 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Returns `true` once the end-of-line token has been produced.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Reads the next token from the input.
    ///
    /// # Errors
    /// Returns `LexError::WrongLexing` for a character no token starts with
    /// or for a string without a closing quote.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::{
    ///     lexer::Lexer,
    ///     token::{Token, TokenKind},
    /// };
    ///
    /// let mut lexer = Lexer::new("x!=1");
    /// assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Identifier, "x"));
    /// assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Operator, "!="));
    /// assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Number, "1"));
    /// assert_eq!(lexer.next_token().unwrap(), Token::eol());
    /// ```
    pub fn next_token(&mut self) -> LexResult<Token> {
        if self.exhausted {
            return Ok(Token::eol());
        }

        let Some(lexeme) = self.inner.next() else {
            self.exhausted = true;
            return Ok(Token::eol());
        };

        let slice = self.inner.slice();
        match lexeme {
            Ok(Lexeme::Sentinel) => {
                self.exhausted = true;
                Ok(Token::eol())
            },
            Ok(Lexeme::Whitespace) => Ok(Token::new(TokenKind::Whitespace, slice)),
            Ok(Lexeme::Operator(operator)) => Ok(Token::operator(operator)),
            Ok(Lexeme::Str(text)) => Ok(Token::new(TokenKind::String, text)),
            Ok(Lexeme::Number) => Ok(Token::new(TokenKind::Number, slice)),
            Ok(Lexeme::Word) => {
                let kind = TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier);
                Ok(Token::new(kind, slice))
            },
            Err(fault) => Err(fault.into_lex_error(slice)),
        }
    }
}

/// Lexes `source` up to and including its end-of-line token.
///
/// # Errors
/// Returns the first [`LexError`] the lexer runs into.
///
/// # Example
/// ```
/// use setlang::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let kinds: Vec<_> = tokenize("set x = 2").unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Set,
///             TokenKind::Whitespace,
///             TokenKind::Identifier,
///             TokenKind::Whitespace,
///             TokenKind::Operator,
///             TokenKind::Whitespace,
///             TokenKind::Number,
///             TokenKind::Eol]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eol;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
