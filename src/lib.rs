//! # radica
//!
//! radica evaluates arithmetic expressions written as text. It supports the
//! four basic operations, parentheses, runs of signs such as `--` or `+-`, and
//! powers with integer or rational exponents. Rational exponents like `(2/3)`
//! are applied exactly through an integer root found with Newton's method.
//!
//! ```
//! assert_eq!(radica::evaluate("2*(3+4)").unwrap(), 14.0);
//! assert_eq!(radica::evaluate("(27)^(2/3)").unwrap(), 9.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Context;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, its operators, and the `Span` type
/// that ties every node back to the text it was parsed from. The tree is built
/// by the parser and walked by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Every error quotes the offending part of the input so that a caller can
/// show the user where things went wrong.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed input and exceeded limits.
/// - Defines `RuntimeError` for invalid exponents.
/// - Joins both under `Error`, the type returned by [`evaluate`].
pub mod error;
/// Turns text into a value.
///
/// This module ties together whitespace and sign normalization, the lexer,
/// the parser, and the evaluator.
pub mod interpreter;
/// General numeric and stack helpers shared by the parser and evaluator.
pub mod util;

pub use error::Error;

/// Evaluates an arithmetic expression with the default settings.
///
/// Whitespace anywhere in the input is ignored. The result is an `f64`;
/// division by zero follows IEEE rules and yields an infinity or NaN.
///
/// # Errors
/// Returns an [`Error`] when the text is not a well-formed expression, when it
/// is nested or sized beyond the limits of [`Context::new`], or when a power
/// has an exponent that cannot be applied.
///
/// # Examples
/// ```
/// use radica::{Error, error::ParseError, evaluate};
///
/// assert_eq!(evaluate("10-3+2").unwrap(), 9.0);
/// assert_eq!(evaluate("  9  ^ (  1 / 2 ) ").unwrap(), 3.0);
///
/// let err = evaluate("(2+3").unwrap_err();
/// assert!(matches!(err, Error::Parse(ParseError::UnmatchedParenthesis { .. })));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    Context::new().evaluate(expression)
}
