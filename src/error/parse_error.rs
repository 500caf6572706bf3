#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or parsing an expression.
pub enum ParseError {
    /// An opening parenthesis has no matching close, or a closing parenthesis
    /// has no matching open.
    UnmatchedParenthesis {
        /// The text starting at the unmatched parenthesis.
        expr: String,
    },
    /// A pair of parentheses encloses nothing.
    EmptyGroup {
        /// The empty group as written.
        expr: String,
    },
    /// Text expected to be a numeric literal could not be read as one.
    MalformedNumber {
        /// The offending text. Empty when the input ended where a number was
        /// expected.
        expr: String,
    },
    /// A `^` has no exponent after it.
    MissingExponent {
        /// The power expression up to and including the `^`.
        expr: String,
    },
    /// Groups, signs and powers are nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum nesting depth.
        limit: usize,
    },
    /// The expression holds more operators than the configured limit.
    TooManyOperators {
        /// The number of operators found.
        count: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedParenthesis { expr } => {
                write!(f, "Error at '{expr}': Unmatched parenthesis.")
            },
            Self::EmptyGroup { expr } => {
                write!(f, "Error at '{expr}': Parentheses enclose no expression.")
            },
            Self::MalformedNumber { expr } if expr.is_empty() => {
                write!(f, "Error: Expected a number but the expression ended.")
            },
            Self::MalformedNumber { expr } => {
                write!(f, "Error at '{expr}': Not a valid number.")
            },
            Self::MissingExponent { expr } => {
                write!(f, "Error at '{expr}': Missing exponent after '^'.")
            },
            Self::NestingTooDeep { limit } => write!(f,
                                                     "Error: Expression is nested deeper than the limit of {limit}."),
            Self::TooManyOperators { count, limit } => write!(f,
                                                              "Error: Expression has {count} operators, but the limit is {limit}."),
        }
    }
}

impl std::error::Error for ParseError {}
