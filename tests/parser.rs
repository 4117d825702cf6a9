use setlang::{
    ast::{BinaryOperator, ComparisonOperator, Expression, Program, Statement},
    error::{Error, ParseError},
    interpreter::{lexer::tokenize, parser::core::parse},
    session::Session,
};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse(&tokenize(source).unwrap())
}

fn single(source: &str) -> Statement {
    let program = parse_source(source).unwrap();
    assert_eq!(program.body.len(), 1, "expected one statement in {source}");
    program.body.into_iter().next().unwrap()
}

fn num(value: f64) -> Expression {
    Expression::Number(value)
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(single("1 + 2 * 3"),
               Statement::Expression(Expression::binary(num(1.0),
                                                        BinaryOperator::Add,
                                                        Expression::binary(num(2.0),
                                                                           BinaryOperator::Mul,
                                                                           num(3.0)))));
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(single("8 - 4 - 2"),
               Statement::Expression(Expression::binary(Expression::binary(num(8.0),
                                                                           BinaryOperator::Sub,
                                                                           num(4.0)),
                                                        BinaryOperator::Sub,
                                                        num(2.0))));
}

#[test]
fn parentheses_group() {
    assert_eq!(single("(1 + 2) * 3"),
               Statement::Expression(Expression::binary(Expression::binary(num(1.0),
                                                                           BinaryOperator::Add,
                                                                           num(2.0)),
                                                        BinaryOperator::Mul,
                                                        num(3.0))));
}

#[test]
fn comparison_binds_loosest_of_operators() {
    assert_eq!(single("1 == 2 + 3"),
               Statement::Expression(Expression::comparison(num(1.0),
                                                            ComparisonOperator::Equal,
                                                            Expression::binary(num(2.0),
                                                                               BinaryOperator::Add,
                                                                               num(3.0)))));
}

#[test]
fn signs_fold_into_the_literal() {
    assert_eq!(single("-5"), Statement::Expression(num(-5.0)));
    assert_eq!(single("--5"), Statement::Expression(num(5.0)));
    assert_eq!(single("-+-5"), Statement::Expression(num(5.0)));
    assert_eq!(single("- 5"), Statement::Expression(num(-5.0)));
}

#[test]
fn sign_needs_a_number() {
    assert!(matches!(parse_source("-x"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn literals() {
    assert_eq!(single("true"), Statement::Expression(Expression::Boolean(true)));
    assert_eq!(single("false"), Statement::Expression(Expression::Boolean(false)));
    assert_eq!(single("null"), Statement::Expression(Expression::Null));
    assert_eq!(single("\"hi\""), Statement::Expression(Expression::String("hi".to_string())));
    assert_eq!(single("name"), Statement::Expression(Expression::Identifier("name".to_string())));
}

#[test]
fn declaration_with_value() {
    assert_eq!(single("set x = 1 + 2"),
               Statement::VariableDeclaration { name:  "x".to_string(),
                                                value: Expression::binary(num(1.0),
                                                                          BinaryOperator::Add,
                                                                          num(2.0)), });
}

#[test]
fn declaration_without_value_is_null() {
    assert_eq!(single("set x"),
               Statement::VariableDeclaration { name:  "x".to_string(),
                                                value: Expression::Null, });
    assert_eq!(single("set x   "),
               Statement::VariableDeclaration { name:  "x".to_string(),
                                                value: Expression::Null, });
}

#[test]
fn declaration_needs_a_name() {
    assert!(matches!(parse_source("set 5"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("set true = 1"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("set x 5"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(single("a = b = 1"),
               Statement::Expression(Expression::assign("a", Expression::assign("b", num(1.0)))));
}

#[test]
fn assignment_needs_a_variable() {
    let error = parse_source("1 = 2").unwrap_err();
    assert_eq!(error, ParseError::InvalidAssignmentTarget { target: "Number(1)".to_string() });
}

#[test]
fn unclosed_parenthesis_fails() {
    let error = parse_source("(1 + 2").unwrap_err();
    assert_eq!(error.to_string(), "Unexpected token: expected ')', got End of line.");
}

#[test]
fn stray_operator_fails() {
    assert!(matches!(parse_source("* 2"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("1 +"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn whitespace_only_line_is_empty() {
    assert!(parse_source("   ").unwrap().body.is_empty());
    assert!(parse_source("").unwrap().body.is_empty());
}

#[test]
fn several_statements_on_one_line() {
    let program = parse_source("1 2").unwrap();
    assert_eq!(program.body,
               vec![Statement::Expression(num(1.0)), Statement::Expression(num(2.0))]);
}

#[test]
fn missing_eol_is_reported() {
    assert_eq!(parse(&[]).unwrap_err(), ParseError::UnexpectedEndOfInput);
}

#[test]
fn tree_dump() {
    let program = Session::parse_line("set x = 1 + 2").unwrap();
    assert_eq!(program.to_string(),
               "Program {\n  VariableDeclaration(x = Binary(Number(1) + Number(2)))\n}");

    let program = Session::parse_line("y = \"a\" != null").unwrap();
    assert_eq!(program.to_string(),
               "Program {\n  VariableAssign(y = Comparison(String(\"a\") != Null))\n}");
}

#[test]
fn session_reports_parse_errors() {
    assert!(matches!(Session::parse_line("set"), Err(Error::Parse(_))));
    assert!(matches!(Session::parse_line("\"open"), Err(Error::Lex(_))));
}
