use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Evaluator, value::RuntimeValue},
};

impl Evaluator {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Numbers are used as they are. A boolean next to a number, or two
    /// booleans, are coerced first (`true` is `1`, `false` is `0`). Any other
    /// combination, such as an operand that is null or a string, quietly
    /// produces `null`.
    ///
    /// # Example
    /// ```
    /// use setlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::RuntimeValue},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                  &RuntimeValue::Boolean(true),
    ///                                  &RuntimeValue::Number(10.0));
    /// assert_eq!(sum, RuntimeValue::Number(11.0));
    ///
    /// let nothing = Evaluator::eval_binary(BinaryOperator::Sub,
    ///                                      &RuntimeValue::Number(4.0),
    ///                                      &RuntimeValue::Null);
    /// assert_eq!(nothing, RuntimeValue::Null);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &RuntimeValue, right: &RuntimeValue) -> RuntimeValue {
        match (left.coerce_to_number(), right.coerce_to_number()) {
            (Some(left), Some(right)) => RuntimeValue::Number(Self::eval_scalar_op(op, left, right)),
            _ => RuntimeValue::Null,
        }
    }
}
