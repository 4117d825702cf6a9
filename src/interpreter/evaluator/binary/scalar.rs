use crate::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Plain IEEE-754 double arithmetic: dividing by zero gives an infinity or
    /// NaN rather than an error, and overflow saturates to infinity.
    ///
    /// # Example
    /// ```
    /// use setlang::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0), 3.0);
    /// assert!(Evaluator::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}
