/// Parser entry points, shared parse state and the nesting guard.
pub mod core;

/// Unary signs, power operands and parenthesized groups.
///
/// Decides whether a sign is unary, whether it fuses with a literal into the
/// base of a `^`, and which operands a `^` binds to on each side.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements the `+`, `-`, `*` and `/` levels as left folds.
pub mod binary;

/// Helpers shared by the parser levels.
pub mod utils;
