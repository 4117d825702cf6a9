use std::iter::Peekable;

use crate::{
    ast::{Expression, Statement},
    interpreter::{
        operator::OperatorKind,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_operator, parse_identifier, peek_token, skip_whitespace},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// A statement is either a variable declaration introduced by `set` or an
/// expression used as a statement.
///
/// Grammar: `statement := "set" IDENTIFIER ("=" expression)? | expression`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }

    Ok(Statement::Expression(parse_expression(tokens)?))
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `set <identifier> [= <expression>]`. When the
/// line ends right after the name, the variable starts out as `null`.
///
/// If the next token is not `set`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing or is a keyword,
/// - something other than `=` or the end of the line follows the name,
/// - the initial value is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token>
{
    if tokens.next_if(|token| token.kind == TokenKind::Set)
             .is_none()
    {
        return Ok(None);
    }
    skip_whitespace(tokens);

    let name = parse_identifier(tokens)?;
    skip_whitespace(tokens);

    if peek_token(tokens)?.kind == TokenKind::Eol {
        return Ok(Some(Statement::VariableDeclaration { name,
                                                        value: Expression::Null }));
    }

    expect_operator(tokens, OperatorKind::Assign)?;
    skip_whitespace(tokens);

    let value = parse_expression(tokens)?;
    skip_whitespace(tokens);

    Ok(Some(Statement::VariableDeclaration { name, value }))
}
