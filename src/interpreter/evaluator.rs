/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], its dispatch over syntax nodes, and the
/// result type shared by the evaluator modules.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic with boolean-to-number coercion and the equality
/// operators with their text-based comparison rules.
pub mod binary;

/// Variable storage.
///
/// The single flat table of declared variables an evaluator owns.
pub mod environment;
