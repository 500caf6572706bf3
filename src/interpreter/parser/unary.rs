use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Span, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            utils::remaining_text,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Where an operand sits relative to the surrounding text.
///
/// Only in leading position does a sign fuse with the number after it, so
/// that `-2^2` raises `-2` while `3*-2^2` negates `2^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// First operand of the whole input or of a parenthesized group.
    Leading,
    /// Any operand that follows an operator.
    Operand,
}

/// Parses a unary expression.
///
/// Signs never come in runs here because the text was normalized first, so at
/// most one sign precedes an operand.
///
/// - In leading position, a sign directly followed by a number becomes part of
///   that literal, which is then the base of any `^` that follows.
/// - Otherwise the sign applies to the whole power term after it. A `+`
///   produces no node.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") NUMBER adjacent* power_tail      (leading position only)
///            | ("+" | "-") power
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `state`: Source text and limits.
/// - `depth`: Current nesting depth.
/// - `position`: Whether this operand is leading.
///
/// # Returns
/// An [`Expr::UnaryOp`], a signed literal, or a power expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 state: &ParseState<'_>,
                                 depth: usize,
                                 position: Position)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let Some(&&(sign @ (Token::Plus | Token::Minus), sign_span)) = tokens.peek() else {
        return parse_power(tokens, state, depth);
    };
    tokens.next();
    let negate = sign == Token::Minus;

    if position == Position::Leading
       && let Some(&&(Token::Number(n), number_span)) = tokens.peek()
    {
        tokens.next();
        let literal = Expr::Literal { value: if negate { -n } else { n },
                                      span:  sign_span.to(number_span), };
        let base = parse_adjacent(tokens, state, depth, literal)?;
        return parse_power_tail(tokens, state, depth, base);
    }

    let depth = state.nest(depth)?;
    let operand = ensure_sufficient_stack(|| parse_power(tokens, state, depth))?;
    if !negate {
        return Ok(operand);
    }

    let span = sign_span.to(operand.span());
    Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                       expr: Box::new(operand),
                       span })
}

/// Parses a power term: a primary optionally raised to an exponent.
///
/// Grammar: `power := primary adjacent* power_tail`
fn parse_power<'a, I>(tokens: &mut Peekable<I>,
                      state: &ParseState<'_>,
                      depth: usize)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let primary = parse_primary(tokens, state, depth)?;
    let base = parse_adjacent(tokens, state, depth, primary)?;
    parse_power_tail(tokens, state, depth, base)
}

/// Joins operands written directly after `first` with no operator between
/// them, as in `2(3)` or `(1)(2)(3)`.
///
/// Grammar: `adjacent := primary` (immediately following another operand)
fn parse_adjacent<'a, I>(tokens: &mut Peekable<I>,
                         state: &ParseState<'_>,
                         depth: usize,
                         first: Expr)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let mut left = first;

    while let Some((Token::Number(_) | Token::LParen, _)) = tokens.peek() {
        let right = parse_primary(tokens, state, depth)?;
        let span = left.span().to(right.span());
        left = Expr::Adjacent { left: Box::new(left),
                                right: Box::new(right),
                                span };
    }

    Ok(left)
}

/// Attaches an exponent to `base` if a `^` follows.
///
/// The exponent is itself a power term, so `a^b^c` parses as `a^(b^c)`.
///
/// Grammar: `power_tail := ("^" exponent)?`
fn parse_power_tail<'a, I>(tokens: &mut Peekable<I>,
                           state: &ParseState<'_>,
                           depth: usize,
                           base: Expr)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let Some(&&(Token::Caret, caret_span)) = tokens.peek() else {
        return Ok(base);
    };
    tokens.next();

    let depth = state.nest(depth)?;
    let exponent = ensure_sufficient_stack(|| {
                       parse_exponent(tokens, state, depth, base.span().to(caret_span))
                   })?;
    let span = base.span().to(exponent.span());
    Ok(Expr::BinaryOp { left: Box::new(base),
                        op: BinaryOperator::Pow,
                        right: Box::new(exponent),
                        span })
}

/// Parses the operand to the right of a `^`.
///
/// The exponent is one optional sign followed by a number or a group, which
/// may carry a further `^`. A sign here applies to that whole power term.
///
/// Grammar:
/// ```text
///     exponent := ("+" | "-")? power
/// ```
/// # Errors
/// - `MissingExponent` when nothing usable follows the `^`.
/// - `MalformedNumber` when a sign follows the `^` but no operand follows the
///   sign.
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                         state: &ParseState<'_>,
                         depth: usize,
                         head: Span)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.peek() {
        Some((Token::Plus | Token::Minus, _)) => {
            parse_unary(tokens, state, depth, Position::Operand)
        },
        Some((Token::Number(_) | Token::LParen, _)) => parse_power(tokens, state, depth),
        _ => Err(ParseError::MissingExponent { expr: state.text(head) }),
    }
}

/// Parses a primary expression: a number or a parenthesized group.
///
/// Grammar: `primary := NUMBER | group`
///
/// # Errors
/// Returns `MalformedNumber` carrying the remaining text (empty at end of
/// input) when neither a number nor `(` is next.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                        state: &ParseState<'_>,
                        depth: usize)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.peek() {
        Some(&&(Token::Number(value), span)) => {
            tokens.next();
            Ok(Expr::Literal { value, span })
        },
        Some((Token::LParen, _)) => parse_grouping(tokens, state, depth),
        next => Err(ParseError::MalformedNumber { expr: remaining_text(next, state) }),
    }
}

/// Parses a parenthesized group.
///
/// The inside is a full expression whose first operand is in leading
/// position.
///
/// Grammar: `group := "(" expression ")"`
///
/// # Errors
/// - `EmptyGroup` for `()`.
/// - `UnmatchedParenthesis` when the input ends before the `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         state: &ParseState<'_>,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let Some(&(_, open)) = tokens.next() else {
        return Err(ParseError::MalformedNumber { expr: String::new() });
    };

    match tokens.peek() {
        Some(&&(Token::RParen, close)) => {
            return Err(ParseError::EmptyGroup { expr: state.text(open.to(close)) });
        },
        None => return Err(ParseError::UnmatchedParenthesis { expr: state.text_from(open) }),
        Some(_) => {},
    }

    let depth = state.nest(depth)?;
    let inner = parse_expression(tokens, state, depth)?;

    match tokens.next() {
        Some(&(Token::RParen, close)) => Ok(Expr::Group { expr: Box::new(inner),
                                                          span: open.to(close), }),
        Some((_, span)) => {
            Err(ParseError::UnmatchedParenthesis { expr: state.text_from(*span) })
        },
        None => Err(ParseError::UnmatchedParenthesis { expr: state.text_from(open) }),
    }
}
