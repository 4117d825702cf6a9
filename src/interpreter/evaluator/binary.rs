/// Dispatch of arithmetic operators by operand type.
pub mod core;

/// Floating-point arithmetic on two numbers.
pub mod scalar;

/// Equality and inequality.
pub mod comparison;
