use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Span},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState},
            unary::{Position, parse_unary},
        },
    },
};

/// Signature shared by every precedence level.
type LevelParser<I> = fn(&mut Peekable<I>, &ParseState<'_>, usize, Position) -> ParseResult<Expr>;

/// Parses addition, the loosest level.
///
/// A `+` only reaches this loop after a complete operand, which is exactly
/// when it is binary. Subtraction binds tighter than addition, so `a+b-c`
/// parses as `a + (b - c)` and `a-b+c` as `(a - b) + c`.
///
/// The rule is: `additive := subtractive ("+" subtractive)*`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `state`: Source text and limits.
/// - `depth`: Current nesting depth.
/// - `position`: Position of the first operand.
///
/// # Returns
/// A left-folded `Expr::BinaryOp` tree.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             state: &ParseState<'_>,
                             depth: usize,
                             position: Position)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    fold_left(tokens,
              state,
              depth,
              position,
              (Token::Plus, BinaryOperator::Add),
              parse_subtractive)
}

/// Parses subtraction.
///
/// The rule is: `subtractive := multiplicative ("-" multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `state`: Source text and limits.
/// - `depth`: Current nesting depth.
/// - `position`: Position of the first operand.
///
/// # Returns
/// A left-folded `Expr::BinaryOp` tree.
pub fn parse_subtractive<'a, I>(tokens: &mut Peekable<I>,
                                state: &ParseState<'_>,
                                depth: usize,
                                position: Position)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    fold_left(tokens,
              state,
              depth,
              position,
              (Token::Minus, BinaryOperator::Sub),
              parse_multiplicative)
}

/// Parses multiplication.
///
/// Division binds tighter than multiplication, so `a*b/c` parses as
/// `a * (b / c)` and `a/b*c` as `(a / b) * c`.
///
/// The rule is: `multiplicative := divisive ("*" divisive)*`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `state`: Source text and limits.
/// - `depth`: Current nesting depth.
/// - `position`: Position of the first operand.
///
/// # Returns
/// A left-folded `Expr::BinaryOp` tree.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   state: &ParseState<'_>,
                                   depth: usize,
                                   position: Position)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    fold_left(tokens,
              state,
              depth,
              position,
              (Token::Star, BinaryOperator::Mul),
              parse_divisive)
}

/// Parses division.
///
/// The rule is: `divisive := unary ("/" unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `state`: Source text and limits.
/// - `depth`: Current nesting depth.
/// - `position`: Position of the first operand.
///
/// # Returns
/// A left-folded `Expr::BinaryOp` tree.
pub fn parse_divisive<'a, I>(tokens: &mut Peekable<I>,
                             state: &ParseState<'_>,
                             depth: usize,
                             position: Position)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    fold_left(tokens,
              state,
              depth,
              position,
              (Token::Slash, BinaryOperator::Div),
              parse_unary)
}

/// Parses `operand (token operand)*` and folds the operands to the left.
///
/// Only the first operand keeps the caller's position; every operand after an
/// operator is in plain operand position.
fn fold_left<'a, I>(tokens: &mut Peekable<I>,
                    state: &ParseState<'_>,
                    depth: usize,
                    position: Position,
                    (token, op): (Token, BinaryOperator),
                    next_level: LevelParser<I>)
                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let mut left = next_level(tokens, state, depth, position)?;

    while let Some((tok, _)) = tokens.peek()
          && *tok == token
    {
        tokens.next();
        let right = next_level(tokens, state, depth, Position::Operand)?;
        let span = left.span().to(right.span());
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                span };
    }

    Ok(left)
}
