use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::RuntimeValue},
};

/// The flat table of variables visible to a program.
///
/// There is a single scope: no nesting and no shadowing. A name is added by
/// a declaration exactly once and can afterwards only be reassigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, RuntimeValue>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with an initial value.
    ///
    /// # Errors
    /// Returns `VariableAlreadyDeclared` if `name` is already in the table.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::{evaluator::environment::Environment, value::RuntimeValue};
    ///
    /// let mut env = Environment::new();
    /// assert!(env.define("x", RuntimeValue::Number(1.0)).is_ok());
    /// assert!(env.define("x", RuntimeValue::Number(2.0)).is_err());
    /// ```
    pub fn define(&mut self, name: &str, value: RuntimeValue) -> EvalResult<()> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::VariableAlreadyDeclared { name: name.to_string() });
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Replaces the value of a declared variable.
    ///
    /// # Errors
    /// Returns `VariableDoesNotExist` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: RuntimeValue) -> EvalResult<()> {
        let slot = self.variables
                       .get_mut(name)
                       .ok_or_else(|| RuntimeError::VariableDoesNotExist { name: name.to_string() })?;
        *slot = value;
        Ok(())
    }

    /// Looks up the value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuntimeValue> {
        self.variables.get(name)
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
