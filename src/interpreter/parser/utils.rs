use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        operator::OperatorKind,
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Consumes every whitespace token at the front of the stream.
pub(in crate::interpreter::parser) fn skip_whitespace<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::Whitespace)
                .is_some()
    {}
}

/// Returns the next token without consuming it.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the stream is empty.
pub(in crate::interpreter::parser) fn peek_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .copied()
          .ok_or(ParseError::UnexpectedEndOfInput)
}

/// Consumes and returns the next token.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the stream is empty.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or(ParseError::UnexpectedEndOfInput)
}

/// Builds the error for a token that does not fit the grammar position.
pub(in crate::interpreter::parser) fn unexpected(expected: impl Into<String>,
                                                 found: &Token)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.into(),
                                  found:    found.to_string(), }
}

/// Consumes an operator token of the given kind.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token is anything else. The
/// offending token is still consumed, which is harmless because parse errors
/// abort the whole line.
pub(in crate::interpreter::parser) fn expect_operator<'a, I>(tokens: &mut Peekable<I>,
                                                             kind: OperatorKind)
                                                             -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;
    if token.is_operator(kind) {
        Ok(token)
    } else {
        Err(unexpected(format!("'{kind}'"), token))
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token is not an identifier,
/// including reserved keywords.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens)?;
    match token.kind {
        TokenKind::Identifier => Ok(token.text.clone()),
        _ => Err(unexpected("an identifier", token)),
    }
}
