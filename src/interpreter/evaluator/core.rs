use crate::{
    ast::{BinaryOperator, Expr},
    error::Error,
    interpreter::{
        lexer::tokenize,
        normalize::{normalize_signs, strip_whitespace},
        parser::core::{ParseState, parse},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an `Error`.
/// Most failures are runtime errors; parse errors appear when operands are
/// joined as text and read again.
pub type EvalResult<T> = Result<T, Error>;

/// Default maximum nesting depth through groups, signs and powers.
pub const MAX_NESTING: usize = 256;
/// Default maximum number of operators in one expression.
pub const MAX_OPERATORS: usize = 4096;
/// Default convergence tolerance for Newton's nth root.
pub const ROOT_TOLERANCE: f64 = 1e-10;
/// Default iteration cap for Newton's nth root.
pub const MAX_ROOT_ITERATIONS: usize = 1000;
/// Default number of decimals kept from a fractional-exponent power.
pub const FRACTION_DIGITS: i32 = 4;

/// Stores the evaluation settings.
///
/// `Context` holds no state between calls; it only carries limits and numeric
/// settings, so one instance can be shared freely across threads.
///
/// ## Usage
///
/// [`crate::evaluate`] uses `Context::new()`. Create one explicitly to change
/// a setting:
///
/// ```
/// use radica::interpreter::evaluator::core::Context;
///
/// let mut context = Context::new();
/// context.fraction_digits = 2;
///
/// assert_eq!(context.evaluate("3^(2/3)").unwrap(), 2.08);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Maximum nesting depth through groups, signs and powers.
    pub max_nesting:         usize,
    /// Maximum number of operators in one expression.
    pub max_operators:       usize,
    /// Newton's method stops once two iterates differ by less than this.
    pub root_tolerance:      f64,
    /// Newton's method gives up after this many iterations.
    pub max_root_iterations: usize,
    /// Decimal places kept from a power with a fractional exponent.
    pub fraction_digits:     i32,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with the default limits and numeric settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_nesting:         MAX_NESTING,
               max_operators:       MAX_OPERATORS,
               root_tolerance:      ROOT_TOLERANCE,
               max_root_iterations: MAX_ROOT_ITERATIONS,
               fraction_digits:     FRACTION_DIGITS, }
    }

    /// Evaluates an expression given as text.
    ///
    /// The text has its whitespace removed and its sign runs collapsed, is
    /// tokenized and parsed once, and the resulting tree is evaluated.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] for malformed input or exceeded limits and
    /// [`Error::Runtime`] for invalid exponents.
    ///
    /// # Example
    /// ```
    /// use radica::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.evaluate("2+3*4").unwrap(), 14.0);
    /// assert!(context.evaluate("(2+3").is_err());
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<f64, Error> {
        let source = normalize_signs(&strip_whitespace(expression));
        tracing::debug!(input = expression, normalized = %source, "evaluating expression");

        let value = self.eval_text(&source)?;

        tracing::debug!(value, "evaluation finished");
        Ok(value)
    }

    /// Tokenizes, parses and evaluates text that is already normalized.
    ///
    /// Besides [`Context::evaluate`], this reads the two sides of a fractional
    /// exponent and operands joined as text.
    pub fn eval_text(&self, source: &str) -> EvalResult<f64> {
        let tokens = tokenize(source)?;
        let state = ParseState::new(source, self.max_nesting, self.max_operators);
        let expr = parse(&tokens, &state)?;
        self.eval(&expr, source)
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// The evaluator dispatches on the node kind: literals, groups, unary and
    /// binary operations. Powers go to [`Context::eval_pow`], operands written
    /// side by side to [`Context::eval_adjacent`].
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `source`: The normalized text the tree was parsed from, used to quote
    ///   sub-expressions in errors.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval(&self, expr: &Expr, source: &str) -> EvalResult<f64> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Group { expr, .. } => self.eval(expr, source),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr, source)?)),
            Expr::BinaryOp { left,
                             op: BinaryOperator::Pow,
                             right,
                             .. } => self.eval_pow(left, right, source),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left, source)?;
                let right = self.eval(right, source)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::Adjacent { left, right, .. } => self.eval_adjacent(left, right, source),
        })
    }
}
