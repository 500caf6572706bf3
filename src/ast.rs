use std::fmt;

/// A byte range `[start, end)` into the normalized expression text.
///
/// Every token and tree node remembers where it came from so errors can quote
/// the offending sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end:   usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// # Example
    /// ```
    /// use radica::ast::Span;
    ///
    /// let joined = Span::new(2, 4).to(Span::new(6, 9));
    /// assert_eq!(joined, Span::new(2, 9));
    /// ```
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self { start: self.start.min(other.start),
               end:   self.end.max(other.end), }
    }

    /// Returns the text covered by this span, or an empty string if the span
    /// does not fit `source`.
    #[must_use]
    pub fn text(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// An expression tree node.
///
/// The tree is built once by the parser and evaluated once by the evaluator.
/// Parenthesized groups are kept as their own node because the power
/// evaluator looks inside them when deciding whether an exponent is a
/// fraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. A sign fused onto a leading literal is part of the
    /// value.
    Literal {
        /// The constant value.
        value: f64,
        /// Location in the normalized text.
        span:  Span,
    },
    /// A parenthesized sub-expression.
    Group {
        /// The enclosed expression.
        expr: Box<Self>,
        /// Location including both parentheses.
        span: Span,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Location including the sign.
        span: Span,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Location covering both operands.
        span:  Span,
    },
    /// Two operands written side by side with no operator, as in `2(3)`.
    ///
    /// The operands are joined as text, so `2(3)` reads as `23`.
    Adjacent {
        /// Operand written first.
        left:  Box<Self>,
        /// Operand written directly after it.
        right: Box<Self>,
        /// Location covering both operands.
        span:  Span,
    },
}

impl Expr {
    /// Returns the span of this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. }
            | Self::Group { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::Adjacent { span, .. } => *span,
        }
    }
}

/// Unary operators.
///
/// A unary `+` never produces a node; only negation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-`).
    Negate,
}

/// Binary operators, listed from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`^`).
    Pow,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}
