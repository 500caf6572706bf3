use std::iter::Peekable;

use crate::{
    ast::{Expr, Span},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            unary::Position,
            utils::{check_balance, check_operator_count},
        },
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Read-only state shared by every parse function.
///
/// Holds the normalized source text, used to quote offending sub-expressions
/// in errors, and the limits that keep recursion bounded.
#[derive(Debug, Clone, Copy)]
pub struct ParseState<'s> {
    /// The normalized text the tokens were read from.
    pub source:        &'s str,
    /// Maximum recursion depth through groups, signs and powers.
    pub max_nesting:   usize,
    /// Maximum number of operator tokens.
    pub max_operators: usize,
}

impl<'s> ParseState<'s> {
    /// Creates the state for parsing `source`.
    #[must_use]
    pub const fn new(source: &'s str, max_nesting: usize, max_operators: usize) -> Self {
        Self { source,
               max_nesting,
               max_operators }
    }

    /// Returns the source text from the start of `span` to the end of input.
    #[must_use]
    pub fn text_from(&self, span: Span) -> String {
        self.source.get(span.start..).unwrap_or_default().to_string()
    }

    /// Returns the source text covered by `span`.
    #[must_use]
    pub fn text(&self, span: Span) -> String {
        span.text(self.source).to_string()
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` once `depth` reaches the configured maximum.
    pub fn nest(&self, depth: usize) -> ParseResult<usize> {
        if depth >= self.max_nesting {
            return Err(ParseError::NestingTooDeep { limit: self.max_nesting });
        }
        Ok(depth + 1)
    }
}

/// Parses a complete token stream into a single expression tree.
///
/// Before descending, the stream is checked against the operator limit and
/// for balanced parentheses. The expression only stops early at a `)` with no
/// opener, which is reported as unmatched.
///
/// # Parameters
/// - `tokens`: The tokens produced by the lexer.
/// - `state`: Source text and limits.
///
/// # Returns
/// The root of the parsed expression.
///
/// # Example
/// ```
/// use radica::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         lexer::tokenize,
///         parser::core::{ParseState, parse},
///     },
/// };
///
/// let source = "1+2*3";
/// let tokens = tokenize(source).unwrap();
/// let expr = parse(&tokens, &ParseState::new(source, 16, 16)).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse(tokens: &[(Token, Span)], state: &ParseState<'_>) -> ParseResult<Expr> {
    check_operator_count(tokens, state)?;
    check_balance(tokens, state)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, state, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((_, span)) => Err(ParseError::UnmatchedParenthesis { expr: state.text_from(*span) }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, used both for the whole
/// input and for the inside of every group. It begins at the lowest
/// precedence level, addition, with its first operand in leading position.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
/// - `state`: Source text and limits.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               state: &ParseState<'_>,
                               depth: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    ensure_sufficient_stack(|| parse_additive(tokens, state, depth, Position::Leading))
}
