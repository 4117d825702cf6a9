use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expression},
    error::ParseError,
    interpreter::{
        operator::OperatorKind,
        parser::{core::ParseResult, primary::parse_primary, utils::skip_whitespace},
        token::Token,
    },
};

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = 1` parses as `a = (b = 1)`.
/// The left side must be a plain variable name.
///
/// The rule is: `assignment := comparison ("=" assignment)?`
///
/// # Errors
/// Returns `InvalidAssignmentTarget` if something other than an identifier
/// stands left of `=`.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_comparison(tokens)?;
    skip_whitespace(tokens);

    if tokens.next_if(|token| token.is_operator(OperatorKind::Assign))
             .is_none()
    {
        return Ok(left);
    }
    skip_whitespace(tokens);

    let Expression::Identifier(name) = left else {
        return Err(ParseError::InvalidAssignmentTarget { target: left.to_string() });
    };

    let value = parse_assignment(tokens)?;
    skip_whitespace(tokens);

    Ok(Expression::assign(name, value))
}

/// Parses equality comparisons.
///
/// Handles left-associative chains of `==` and `!=`.
///
/// The rule is: `comparison := additive (("==" | "!=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_additive(tokens)?;
    skip_whitespace(tokens);

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_comparison_operator(token)
        {
            tokens.next();
            skip_whitespace(tokens);
            let right = parse_additive(tokens)?;
            skip_whitespace(tokens);
            left = Expression::comparison(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    skip_whitespace(tokens);

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            skip_whitespace(tokens);
            let right = parse_multiplicative(tokens)?;
            skip_whitespace(tokens);
            left = Expression::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative binary operators: `*` and `/`. Operands are
/// primary expressions, so `2 * -3` folds the sign into the literal.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_primary(tokens)?;
    skip_whitespace(tokens);

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            skip_whitespace(tokens);
            let right = parse_primary(tokens)?;
            skip_whitespace(tokens);
            left = Expression::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its arithmetic operator.
///
/// Returns `None` for tokens that are not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use setlang::{
///     ast::BinaryOperator,
///     interpreter::{
///         operator::{Operator, OperatorKind},
///         parser::binary::token_to_binary_operator,
///         token::Token,
///     },
/// };
///
/// let plus = Token::operator(Operator::new(OperatorKind::Plus));
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.operator_kind()? {
        OperatorKind::Plus => Some(BinaryOperator::Add),
        OperatorKind::Minus => Some(BinaryOperator::Sub),
        OperatorKind::Star => Some(BinaryOperator::Mul),
        OperatorKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its equality operator.
///
/// Returns `None` for tokens that are not `==` or `!=`.
#[must_use]
pub fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token.operator_kind()? {
        OperatorKind::Equal => Some(ComparisonOperator::Equal),
        OperatorKind::NotEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}
