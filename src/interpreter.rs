/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the tree built by the parser, performs the arithmetic,
/// resolves integer and fractional exponents, and reports the few runtime
/// errors an expression can raise.
///
/// # Responsibilities
/// - Evaluates every node kind to an `f64`.
/// - Holds the configurable limits and numeric settings in `Context`.
/// - Quotes the offending sub-expression in every error.
pub mod evaluator;
/// The lexer module tokenizes normalized expression text.
///
/// The lexer reads text that has already lost its whitespace and had its sign
/// runs collapsed, and produces number, operator and parenthesis tokens with
/// their byte spans.
///
/// # Responsibilities
/// - Converts the character stream into tokens with source spans.
/// - Reads digit-and-dot runs as `f64` literals.
/// - Reports any other character as a malformed number.
pub mod lexer;
/// The normalize module prepares raw input for the lexer.
///
/// # Responsibilities
/// - Strips all whitespace.
/// - Collapses adjacent `+`/`-` runs to a single sign, to a fixpoint.
pub mod normalize;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a recursive descent over the precedence levels `+`, `-`,
/// `*`, `/` and `^`, with the operand rules that decide which signs are unary
/// and what a `^` binds to.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Detects unbalanced and empty parentheses, missing operands and missing
///   exponents.
/// - Enforces the nesting and operator limits.
pub mod parser;
