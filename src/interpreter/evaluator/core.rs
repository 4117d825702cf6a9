use crate::{
    ast::{Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::RuntimeValue},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks syntax trees and keeps the variables they declare.
///
/// ## Usage
///
/// An `Evaluator` is created once per session and reused for every program
/// it runs, so variables declared by one program are visible to the next.
#[derive(Debug, Default)]
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    /// Creates an evaluator with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Evaluates every statement of `program` and renders the last value.
    ///
    /// An empty program renders as `null`.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    ///
    /// # Example
    /// ```
    /// use setlang::{
    ///     ast::{BinaryOperator, Expression, Program, Statement},
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// // 3 * (3 + 2)
    /// let sum = Expression::binary(Expression::Number(3.0),
    ///                              BinaryOperator::Add,
    ///                              Expression::Number(2.0));
    /// let product = Expression::binary(Expression::Number(3.0), BinaryOperator::Mul, sum);
    /// let program = Program::new(vec![Statement::Expression(product)]);
    ///
    /// let mut evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate_program(&program).unwrap(), "15");
    /// ```
    pub fn evaluate_program(&mut self, program: &Program) -> EvalResult<String> {
        Ok(self.eval_program(program)?.value())
    }

    /// Evaluates every statement of `program` and returns the last value.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<RuntimeValue> {
        let mut last = RuntimeValue::Null;
        for statement in &program.body {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// A declaration evaluates its initial value first and only then adds the
    /// variable, so `set x = x` fails on the unknown `x`.
    ///
    /// # Errors
    /// Returns `VariableAlreadyDeclared` for a second declaration of the same
    /// name, and any error raised by the statement's expressions.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<RuntimeValue> {
        match statement {
            Statement::Program(program) => self.eval_program(program),
            Statement::VariableDeclaration { name, value } => {
                let value = self.eval(value)?;
                self.environment.define(name, value.clone())?;
                Ok(value)
            },
            Statement::Expression(expr) => self.eval(expr),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// - `UnknownVariable` when reading a variable that was never declared.
    /// - `VariableDoesNotExist` when assigning one.
    /// - `UnexpectedStatement` for whitespace and `!` nodes, which have no
    ///   value.
    pub fn eval(&mut self, expr: &Expression) -> EvalResult<RuntimeValue> {
        match expr {
            Expression::Null => Ok(RuntimeValue::Null),
            Expression::Number(value) => Ok(RuntimeValue::Number(*value)),
            Expression::Boolean(value) => Ok(RuntimeValue::Boolean(*value)),
            Expression::String(text) => Ok(RuntimeValue::String(text.clone())),
            Expression::Identifier(name) => self.eval_identifier(name),
            Expression::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, &left, &right))
            },
            Expression::Comparison { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_comparison(*op, &left, &right))
            },
            Expression::VariableAssign { name, value } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
            Expression::Whitespace(_) | Expression::Not(_) => {
                Err(RuntimeError::UnexpectedStatement { node: expr.to_string() })
            },
        }
    }

    fn eval_identifier(&self, name: &str) -> EvalResult<RuntimeValue> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}
