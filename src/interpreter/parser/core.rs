use std::iter::Peekable;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        parser::{
            binary::parse_assignment,
            statement::parse_statement,
            utils::{peek_token, skip_whitespace},
        },
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}

/// Builds a [`Program`] from a token stream.
///
/// Statements are parsed until the end-of-line token, which is consumed
/// as well. Whitespace between statements is skipped. Tokens after the
/// end-of-line marker are left untouched.
///
/// # Errors
/// Returns the first [`ParseError`] found; no partial program is returned.
///
/// # Example
/// ```
/// use setlang::{
///     ast::{BinaryOperator, Expression, Statement},
///     interpreter::{lexer::tokenize, parser::core::produce_ast},
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let program = produce_ast(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.body,
///            vec![Statement::Expression(Expression::binary(Expression::Number(1.0),
///                                                          BinaryOperator::Add,
///                                                          Expression::Number(2.0)))]);
/// ```
pub fn produce_ast<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut body = Vec::new();

    loop {
        skip_whitespace(tokens);
        if peek_token(tokens)?.kind == TokenKind::Eol {
            break;
        }
        body.push(parse_statement(tokens)?);
    }

    // Consume the end-of-line marker.
    tokens.next();

    Ok(Program::new(body))
}

/// Parses a complete token slice into a [`Program`].
///
/// # Errors
/// Returns the first [`ParseError`] found.
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    produce_ast(&mut tokens.iter().peekable())
}
