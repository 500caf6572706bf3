#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a parsed expression.
///
/// Plain division by zero is not among them: `/` follows IEEE semantics and
/// yields infinity or NaN.
pub enum RuntimeError {
    /// A plain (non-fractional) exponent is not a whole number.
    NonIntegerExponent {
        /// The value the exponent evaluated to.
        exponent: f64,
        /// The exponent as written.
        expr:     String,
    },
    /// A fractional exponent whose numerator or denominator is not a whole
    /// number.
    InvalidFractionalExponent {
        /// The exponent as written.
        expr: String,
    },
    /// A fractional exponent whose denominator is zero.
    DivisionByZero {
        /// The exponent as written.
        expr: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerExponent { exponent, expr } => write!(f,
                                                                  "Error at '{expr}': Exponent {exponent} is not an integer. Use a fraction such as (1/2) for roots."),
            Self::InvalidFractionalExponent { expr } => write!(f,
                                                               "Error at '{expr}': Numerator and denominator of a fractional exponent must be integers."),
            Self::DivisionByZero { expr } => {
                write!(f, "Error at '{expr}': Division by zero in exponent.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
