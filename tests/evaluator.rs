use setlang::{
    ast::{BinaryOperator, ComparisonOperator, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::RuntimeValue},
};

fn declare(name: &str, value: Expression) -> Statement {
    Statement::VariableDeclaration { name: name.to_string(),
                                     value }
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(name.to_string())
}

fn run(evaluator: &mut Evaluator, body: Vec<Statement>) -> Result<String, RuntimeError> {
    evaluator.evaluate_program(&Program::new(body))
}

#[test]
fn empty_program_is_null() {
    let mut evaluator = Evaluator::new();
    assert_eq!(run(&mut evaluator, Vec::new()).unwrap(), "null");
}

#[test]
fn last_statement_wins() {
    let mut evaluator = Evaluator::new();
    let body = vec![Statement::Expression(Expression::Number(1.0)),
                    Statement::Expression(Expression::Boolean(true))];
    assert_eq!(run(&mut evaluator, body).unwrap(), "true");
}

#[test]
fn literals_evaluate_to_values() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.eval(&Expression::Null).unwrap(), RuntimeValue::Null);
    assert_eq!(evaluator.eval(&Expression::Number(2.5)).unwrap(), RuntimeValue::Number(2.5));
    assert_eq!(evaluator.eval(&Expression::String("s".to_string())).unwrap(),
               RuntimeValue::from("s"));
    assert_eq!(evaluator.eval(&Expression::Boolean(false)).unwrap(), RuntimeValue::Boolean(false));
}

#[test]
fn booleans_coerce_in_arithmetic() {
    let mut evaluator = Evaluator::new();
    let sum = Expression::binary(Expression::Boolean(true),
                                 BinaryOperator::Add,
                                 Expression::Boolean(true));
    assert_eq!(evaluator.eval(&sum).unwrap(), RuntimeValue::Number(2.0));
}

#[test]
fn null_in_arithmetic_is_null() {
    let mut evaluator = Evaluator::new();
    let product = Expression::binary(Expression::Null, BinaryOperator::Mul, Expression::Number(3.0));
    assert_eq!(evaluator.eval(&product).unwrap(), RuntimeValue::Null);
}

#[test]
fn division_by_zero_is_infinite() {
    let mut evaluator = Evaluator::new();
    let quotient = Expression::binary(Expression::Number(1.0),
                                      BinaryOperator::Div,
                                      Expression::Number(0.0));
    assert_eq!(evaluator.eval(&quotient).unwrap(), RuntimeValue::Number(f64::INFINITY));
    assert_eq!(evaluator.evaluate_program(&Program::new(vec![quotient.into()])).unwrap(), "inf");
}

#[test]
fn mismatched_types_are_never_equal_or_unequal() {
    let mut evaluator = Evaluator::new();
    for op in [ComparisonOperator::Equal, ComparisonOperator::NotEqual] {
        let comparison = Expression::comparison(Expression::Null, op, Expression::Number(0.0));
        assert_eq!(evaluator.eval(&comparison).unwrap(), RuntimeValue::Boolean(false));
    }
}

#[test]
fn numbers_compare_by_rendered_text() {
    let mut evaluator = Evaluator::new();
    let comparison = Expression::comparison(Expression::Number(0.1 + 0.2),
                                            ComparisonOperator::Equal,
                                            Expression::Number(0.3));
    assert_eq!(evaluator.eval(&comparison).unwrap(), RuntimeValue::Boolean(true));

    let comparison = Expression::comparison(Expression::Number(-0.0),
                                            ComparisonOperator::Equal,
                                            Expression::Number(0.0));
    assert_eq!(evaluator.eval(&comparison).unwrap(), RuntimeValue::Boolean(true));
}

#[test]
fn environment_persists_between_programs() {
    let mut evaluator = Evaluator::new();
    run(&mut evaluator, vec![declare("x", Expression::Number(5.0))]).unwrap();
    let doubled = Expression::binary(ident("x"), BinaryOperator::Mul, Expression::Number(2.0));
    assert_eq!(run(&mut evaluator, vec![doubled.into()]).unwrap(), "10");
    assert!(evaluator.environment().contains("x"));
    assert!(!evaluator.environment().is_empty());
}

#[test]
fn assignment_replaces_value() {
    let mut evaluator = Evaluator::new();
    let body = vec![declare("x", Expression::Number(1.0)),
                    Expression::assign("x", Expression::String("new".to_string())).into(),
                    ident("x").into()];
    assert_eq!(run(&mut evaluator, body).unwrap(), "new");
    assert_eq!(evaluator.environment().get("x"), Some(&RuntimeValue::from("new")));
}

#[test]
fn declaration_evaluates_value_before_defining() {
    let mut evaluator = Evaluator::new();
    let error = run(&mut evaluator, vec![declare("x", ident("x"))]).unwrap_err();
    assert_eq!(error, RuntimeError::UnknownVariable { name: "x".to_string() });
    assert!(evaluator.environment().is_empty());
}

#[test]
fn redeclaration_fails() {
    let mut evaluator = Evaluator::new();
    let error = run(&mut evaluator,
                    vec![declare("x", Expression::Null), declare("x", Expression::Null)]).unwrap_err();
    assert_eq!(error, RuntimeError::VariableAlreadyDeclared { name: "x".to_string() });
}

#[test]
fn assigning_undeclared_fails() {
    let mut evaluator = Evaluator::new();
    let error = evaluator.eval(&Expression::assign("ghost", Expression::Number(1.0)))
                         .unwrap_err();
    assert_eq!(error, RuntimeError::VariableDoesNotExist { name: "ghost".to_string() });
}

#[test]
fn whitespace_and_not_nodes_cannot_be_evaluated() {
    let mut evaluator = Evaluator::new();

    let error = evaluator.eval(&Expression::Whitespace(" ".to_string())).unwrap_err();
    assert!(matches!(error, RuntimeError::UnexpectedStatement { .. }));

    let not = Expression::Not(Box::new(Expression::Boolean(true)));
    let error = evaluator.eval(&not).unwrap_err();
    assert_eq!(error, RuntimeError::UnexpectedStatement { node: "Not(Boolean(true))".to_string() });
}

#[test]
fn nested_program_statement() {
    let mut evaluator = Evaluator::new();
    let inner = Program::new(vec![declare("y", Expression::Number(3.0))]);
    let body = vec![Statement::Program(inner), ident("y").into()];
    assert_eq!(run(&mut evaluator, body).unwrap(), "3");
}
