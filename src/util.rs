/// Numeric helpers.
///
/// This module provides exact conversion from `f64` to integers, the greatest
/// common divisor used to reduce fractional exponents, decimal rounding, and
/// integer powers by repeated multiplication.
pub mod num;
/// Stack growth for deep recursion.
///
/// Parsing and evaluation recurse once per nesting level. Wrapping those calls
/// in [`stack::ensure_sufficient_stack`] grows the stack on demand so the
/// configured limits, not the thread's stack size, decide how deep an
/// expression may go.
pub mod stack;
