use crate::{
    ast::Span,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, ParseState},
    },
};

/// Rejects token streams with more operators than the configured limit.
///
/// Chains of `+ - * /` fold into trees whose depth grows with the chain, so
/// the operator count is what bounds evaluation depth for flat input.
///
/// # Errors
/// Returns `TooManyOperators` when the count exceeds `state.max_operators`.
pub(in crate::interpreter::parser) fn check_operator_count(tokens: &[(Token, Span)],
                                                           state: &ParseState<'_>)
                                                           -> ParseResult<()> {
    let count = tokens.iter().filter(|(tok, _)| tok.is_operator()).count();
    if count > state.max_operators {
        return Err(ParseError::TooManyOperators { count,
                                                  limit: state.max_operators });
    }
    Ok(())
}

/// Verifies that every `(` has a matching `)` and vice versa.
///
/// A `)` with no opener is reported with the text from that `)` on. If some
/// `(` are left open at the end, the innermost one is reported with the text
/// from that `(` on.
///
/// # Errors
/// Returns `UnmatchedParenthesis` for the first imbalance found.
pub(in crate::interpreter::parser) fn check_balance(tokens: &[(Token, Span)],
                                                    state: &ParseState<'_>)
                                                    -> ParseResult<()> {
    let mut open = Vec::new();

    for (tok, span) in tokens {
        match tok {
            Token::LParen => open.push(*span),
            Token::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedParenthesis { expr: state.text_from(*span) });
                }
            },
            _ => {},
        }
    }

    match open.last() {
        Some(span) => Err(ParseError::UnmatchedParenthesis { expr: state.text_from(*span) }),
        None => Ok(()),
    }
}

/// Returns the text from `span` on, or an empty string at end of input.
///
/// Used for errors raised where an operand was expected.
pub(in crate::interpreter::parser) fn remaining_text(next: Option<&&(Token, Span)>,
                                                     state: &ParseState<'_>)
                                                     -> String {
    next.map(|(_, span)| state.text_from(*span)).unwrap_or_default()
}
