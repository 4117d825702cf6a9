/// Number rendering helpers.
///
/// The language compares values by their rendered text, so the exact way a
/// number is turned into a string is part of its semantics. This module owns
/// that conversion.
pub mod num;
