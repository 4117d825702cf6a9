use std::iter::Peekable;

use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        operator::OperatorKind,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_operator, next_token, peek_token, skip_whitespace, unexpected},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := IDENTIFIER | NUMBER | STRING | NULLABLE | TRUE | FALSE
///              | WHITESPACE
///              | "(" expression ")"
///              | ("+" | "-")+ NUMBER
/// ```
///
/// # Errors
/// Returns `UnexpectedToken` for any other token, including operators other
/// than `(`, `+` and `-`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens)?;

    let expr = match token.kind {
        TokenKind::Identifier => Expression::Identifier(token.text.clone()),
        TokenKind::Number => Expression::Number(parse_number_literal(&token.text)?),
        TokenKind::String => Expression::String(token.text.clone()),
        TokenKind::Nullable => Expression::Null,
        TokenKind::True => Expression::Boolean(true),
        TokenKind::False => Expression::Boolean(false),
        TokenKind::Whitespace => Expression::Whitespace(token.text.clone()),
        TokenKind::Operator => {
            return match token.operator_kind() {
                Some(OperatorKind::LParen) => parse_grouping(tokens),
                Some(OperatorKind::Plus | OperatorKind::Minus) => parse_signed_number(tokens),
                _ => Err(unexpected("an expression", token)),
            };
        },
        _ => return Err(unexpected("an expression", token)),
    };

    tokens.next();
    Ok(expr)
}

/// Parses a parenthesised expression: `"(" expression ")"`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    expect_operator(tokens, OperatorKind::LParen)?;
    skip_whitespace(tokens);

    let expr = parse_expression(tokens)?;
    skip_whitespace(tokens);

    expect_operator(tokens, OperatorKind::RParen)?;
    Ok(expr)
}

/// Folds a run of `+` and `-` signs into the number that follows it.
///
/// Every `-` flips the sign, so `--5` is `5` and `-+-5` is `5`. Whitespace
/// may separate the signs and the number. The result is a single number
/// literal, not a chain of unary nodes.
fn parse_signed_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let mut negative = false;

    while let Some(sign) =
        tokens.next_if(|token| {
                  token.is_operator(OperatorKind::Plus) || token.is_operator(OperatorKind::Minus)
              })
    {
        if sign.is_operator(OperatorKind::Minus) {
            negative = !negative;
        }
        skip_whitespace(tokens);
    }

    let token = next_token(tokens)?;
    if token.kind != TokenKind::Number {
        return Err(unexpected("a number after the sign", token));
    }

    let value = parse_number_literal(&token.text)?;
    Ok(Expression::Number(if negative { -value } else { value }))
}

/// Reads a run of digits as a number.
fn parse_number_literal(literal: &str) -> ParseResult<f64> {
    literal.parse()
           .map_err(|_| ParseError::InvalidNumber { literal: literal.to_string() })
}
