use crate::util::num::render_number;

/// The type of a [`RuntimeValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`RuntimeValue::Null`]
    Null,
    /// [`RuntimeValue::Number`]
    Number,
    /// [`RuntimeValue::Boolean`]
    Boolean,
    /// [`RuntimeValue::String`]
    String,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// Values are never changed in place: assigning to a variable replaces its
/// value with a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// The absence of a value. Also the result of arithmetic on operands that
    /// cannot be coerced to numbers.
    Null,
    /// A double precision floating-point number.
    Number(f64),
    /// `true` or `false`. Comparisons and coercions work on its rendered
    /// text, `"true"` or `"false"`.
    Boolean(bool),
    /// A string of text.
    String(String),
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for RuntimeValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for RuntimeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl RuntimeValue {
    /// Returns the type of the value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Renders the value as text.
    ///
    /// This is both what the interpreter prints and what `==`/`!=` compare.
    ///
    /// # Example
    /// ```
    /// use setlang::interpreter::value::RuntimeValue;
    ///
    /// assert_eq!(RuntimeValue::Number(15.0).value(), "15");
    /// assert_eq!(RuntimeValue::Boolean(false).value(), "false");
    /// assert_eq!(RuntimeValue::Null.value(), "null");
    /// ```
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Number(n) => render_number(*n),
            Self::Boolean(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Converts the value to a number for arithmetic.
    ///
    /// Numbers pass through and booleans coerce to `1` or `0`. Null and
    /// strings have no numeric form.
    #[must_use]
    pub const fn coerce_to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Boolean(true) => Some(1.0),
            Self::Boolean(false) => Some(0.0),
            Self::Null | Self::String(_) => None,
        }
    }

    /// Converts the value to a boolean for comparison against one.
    ///
    /// A number is `true` when it is greater than zero. Booleans pass through;
    /// null and strings have no boolean form.
    #[must_use]
    pub fn coerce_to_boolean(&self) -> Option<bool> {
        match self {
            Self::Number(n) => Some(*n > 0.0),
            Self::Boolean(b) => Some(*b),
            Self::Null | Self::String(_) => None,
        }
    }
}

impl std::fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
