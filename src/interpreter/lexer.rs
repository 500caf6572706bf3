use logos::Logos;

use crate::{
    ast::Span,
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Represents a lexical token in a normalized expression.
///
/// The lexer runs after whitespace removal and sign normalization, so it never
/// sees blanks and never sees two signs in a row.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens: any run of digits and dots that parses as an
    /// `f64`, such as `3`, `2.5`, `.5` or `5.`. A run such as `1.2.3` is a
    /// lexer error.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` for tokens that count toward the operator limit.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Caret)
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid number (e.g. `.` or `1.2.3`).
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits normalized expression text into tokens paired with their spans.
///
/// Any character outside the expression alphabet, and any digit/dot run that
/// is not a number, is reported as [`ParseError::MalformedNumber`] carrying
/// the offending slice.
///
/// # Example
/// ```
/// use radica::{
///     ast::Span,
///     error::ParseError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("2*-3.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), Span::new(0, 1)),
///                 (Token::Star, Span::new(1, 2)),
///                 (Token::Minus, Span::new(2, 3)),
///                 (Token::Number(3.5), Span::new(3, 6)),]);
///
/// let err = tokenize("1.2.3+1").unwrap_err();
/// assert_eq!(err, ParseError::MalformedNumber { expr: "1.2.3".to_string() });
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Span)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, Span::from(lexer.span())));
        } else {
            return Err(ParseError::MalformedNumber { expr: lexer.slice().to_string() });
        }
    }

    Ok(tokens)
}
