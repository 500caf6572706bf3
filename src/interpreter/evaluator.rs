/// Core evaluation logic and configuration.
///
/// Contains the `Context` that carries limits and numeric settings, the
/// public `evaluate` pipeline, and the tree walk.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*` and `/` with IEEE semantics.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Exponentiation.
///
/// Integer exponents by repeated multiplication, fractional exponents through
/// a Newton nth root, rounded to a fixed number of decimals.
pub mod power;

/// Operands written side by side.
pub mod adjacent;
