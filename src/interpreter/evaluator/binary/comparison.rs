use crate::{
    ast::ComparisonOperator,
    interpreter::{evaluator::core::Evaluator, value::RuntimeValue},
};

/// Maps an equality result to the final boolean for `op`.
///
/// `==` keeps the result, `!=` inverts it.
#[must_use]
pub const fn equality_op_result(op: ComparisonOperator, is_equal: bool) -> bool {
    match op {
        ComparisonOperator::Equal => is_equal,
        ComparisonOperator::NotEqual => !is_equal,
    }
}

impl Evaluator {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// - Values of the same type are equal when their rendered text is equal,
    ///   so `1 == 1` and `"a" == "a"` hold, and `null == null` too.
    /// - A number compared with a boolean is first turned into a boolean:
    ///   greater than zero is `true`, anything else `false`.
    /// - Any other pair of types is never comparable and yields `false` for
    ///   `==` and `!=` alike.
    ///
    /// # Example
    /// ```
    /// use setlang::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::RuntimeValue},
    /// };
    ///
    /// let result = Evaluator::eval_comparison(ComparisonOperator::Equal,
    ///                                         &RuntimeValue::Number(-10.0),
    ///                                         &RuntimeValue::Boolean(false));
    /// assert_eq!(result, RuntimeValue::Boolean(true));
    ///
    /// let result = Evaluator::eval_comparison(ComparisonOperator::NotEqual,
    ///                                         &RuntimeValue::from("1"),
    ///                                         &RuntimeValue::Number(1.0));
    /// assert_eq!(result, RuntimeValue::Boolean(false));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &RuntimeValue,
                           right: &RuntimeValue)
                           -> RuntimeValue {
        use RuntimeValue::{Boolean, Number};

        let is_equal = match (left, right) {
            _ if left.kind() == right.kind() => left.value() == right.value(),
            (Number(_), Boolean(_)) | (Boolean(_), Number(_)) => {
                left.coerce_to_boolean() == right.coerce_to_boolean()
            },
            _ => return Boolean(false),
        };

        Boolean(equality_op_result(op, is_equal))
    }
}
