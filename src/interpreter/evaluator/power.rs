use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{f64_to_i64_exact, gcd, repeated_multiply, round_to_places},
};

/// An exponent written as a quotient, such as `(2/3)`, `(1+1/2)` or `-(1/2)`.
///
/// The two sides are the text on either side of the first `/` that sits
/// directly inside the exponent's parentheses; `negated` records a sign in
/// front of the group.
struct Fraction<'s> {
    numerator:   &'s str,
    denominator: &'s str,
    negated:     bool,
}

impl<'s> Fraction<'s> {
    /// Recognizes a fractional exponent.
    ///
    /// One leading minus is looked through, then the exponent must be a
    /// parenthesized group with a `/` outside any inner parentheses. So
    /// `(1+1/2)` is the fraction `(1+1)/2` and `(1/2*4)` is `1/(2*4)`, while
    /// `((1/2))` and `(1/2)^2` are not fractions.
    fn detect(exponent: &Expr, source: &'s str) -> Option<Self> {
        let (negated, inner) = match exponent {
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => (true, expr.as_ref()),
            other => (false, other),
        };
        let Expr::Group { span, .. } = inner else {
            return None;
        };

        let inside = span.text(source).strip_prefix('(')?.strip_suffix(')')?;
        let slash = top_level_slash(inside)?;

        Some(Self { numerator: &inside[..slash],
                    denominator: &inside[slash + 1..],
                    negated })
    }
}

/// Byte offset of the first `/` not enclosed in parentheses.
fn top_level_slash(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => return Some(i),
            _ => {},
        }
    }
    None
}

impl Context {
    /// Evaluates `base ^ exponent`.
    ///
    /// An exponent written as a quotient is raised exactly as a rational power
    /// through an integer root and the result rounded to
    /// [`Context::fraction_digits`] places. Any other exponent must evaluate to
    /// a whole number and is applied by repeated multiplication, unrounded.
    ///
    /// # Errors
    /// - `InvalidFractionalExponent` if either side of a quotient exponent is
    ///   not a whole number.
    /// - `DivisionByZero` if the denominator of a quotient exponent is zero.
    /// - `NonIntegerExponent` if a plain exponent is not a whole number.
    ///
    /// # Example
    /// ```
    /// use radica::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.evaluate("(27)^(2/3)").unwrap(), 9.0);
    /// assert_eq!(context.evaluate("2^(1+1/2)").unwrap(), 2.0);
    /// assert_eq!(context.evaluate("(2+1)^-2").unwrap(), 1.0 / 9.0);
    /// assert!(context.evaluate("2^0.5").is_err());
    /// ```
    pub fn eval_pow(&self, base: &Expr, exponent: &Expr, source: &str) -> EvalResult<f64> {
        let base_value = self.eval(base, source)?;

        if let Some(fraction) = Fraction::detect(exponent, source) {
            let (p, q) = self.eval_fraction(&fraction, exponent.span().text(source))?;
            return Ok(self.rational_power(base_value, p, q));
        }

        let exponent_value = self.eval(exponent, source)?;
        if let Some(n) = f64_to_i64_exact(exponent_value) {
            return Ok(integer_power(base_value, n));
        }
        if exponent_value.is_finite() && exponent_value.fract() == 0.0 {
            tracing::debug!(exponent = exponent_value, "whole exponent beyond exact range");
            return Ok(base_value.powf(exponent_value));
        }

        Err(RuntimeError::NonIntegerExponent { exponent: exponent_value,
                                               expr:     exponent.span()
                                                                 .text(source)
                                                                 .to_string(), }.into())
    }

    /// Evaluates both sides of a fractional exponent and reduces it to lowest
    /// terms with the sign carried by the numerator.
    ///
    /// Each side is read as an expression of its own, so a sign at the start
    /// of either side is a leading sign.
    fn eval_fraction(&self, fraction: &Fraction<'_>, text: &str) -> EvalResult<(i64, u64)> {
        let invalid = || RuntimeError::InvalidFractionalExponent { expr: text.to_string() };

        let numerator = f64_to_i64_exact(self.eval_text(fraction.numerator)?).ok_or_else(invalid)?;
        let denominator =
            f64_to_i64_exact(self.eval_text(fraction.denominator)?).ok_or_else(invalid)?;

        if denominator == 0 {
            return Err(RuntimeError::DivisionByZero { expr: text.to_string() }.into());
        }

        let numerator = if fraction.negated { -numerator } else { numerator };
        let negative = (numerator < 0) != (denominator < 0);
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());

        let p = i64::try_from(numerator.unsigned_abs() / divisor).map_err(|_| invalid())?;
        let p = if negative { -p } else { p };
        let q = denominator.unsigned_abs() / divisor;

        tracing::trace!(p, q, "fractional exponent");
        Ok((p, q))
    }

    /// Raises `base` to `p/q`: the `q`-th root taken by Newton's method, then
    /// raised to `|p|`, inverted when `p` is negative, and rounded.
    fn rational_power(&self, base: f64, p: i64, q: u64) -> f64 {
        let root = self.nth_root(base, q);
        let raised = repeated_multiply(root, p.unsigned_abs());
        let value = if p < 0 { 1.0 / raised } else { raised };
        round_to_places(value, self.fraction_digits)
    }

    /// Approximates the `n`-th root of `value` with Newton's method.
    ///
    /// Starting from `value / n`, the iteration
    /// `x' = ((n - 1) * x + value / x^(n-1)) / n` runs until two successive
    /// iterates differ by less than [`Context::root_tolerance`]. If that does
    /// not happen within [`Context::max_root_iterations`] steps, or the iterate
    /// stops being finite, the root is computed directly: negative values get
    /// a negative root for odd `n` and NaN for even `n`.
    ///
    /// # Example
    /// ```
    /// use radica::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert!((context.nth_root(27.0, 3) - 3.0).abs() < 1e-9);
    /// assert!((context.nth_root(-8.0, 3) + 2.0).abs() < 1e-9);
    /// assert_eq!(context.nth_root(0.0, 5), 0.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn nth_root(&self, value: f64, n: u64) -> f64 {
        if value == 0.0 {
            return 0.0;
        }
        if n == 1 {
            return value;
        }

        let degree = n as f64;
        let mut guess = value / degree;
        for _ in 0..self.max_root_iterations {
            let next = ((degree - 1.0) * guess + value / repeated_multiply(guess, n - 1)) / degree;
            if !next.is_finite() {
                break;
            }
            if (next - guess).abs() < self.root_tolerance {
                return next;
            }
            guess = next;
        }

        tracing::debug!(value, n, "newton iteration did not converge");
        direct_root(value, degree, n)
    }
}

/// Raises `base` to a whole exponent. Zero gives 1 and negative exponents the
/// reciprocal.
fn integer_power(base: f64, n: i64) -> f64 {
    match n {
        0 => 1.0,
        n if n < 0 => 1.0 / repeated_multiply(base, n.unsigned_abs()),
        n => repeated_multiply(base, n.unsigned_abs()),
    }
}

fn direct_root(value: f64, degree: f64, n: u64) -> f64 {
    if value >= 0.0 {
        return value.powf(degree.recip());
    }
    if n % 2 == 1 {
        -(-value).powf(degree.recip())
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_power() {
        assert_eq!(integer_power(2.0, 10), 1024.0);
        assert_eq!(integer_power(0.0, 0), 1.0);
        assert_eq!(integer_power(2.0, -2), 0.25);
        assert_eq!(integer_power(0.0, -1), f64::INFINITY);
    }

    #[test]
    fn test_nth_root_negative_even_is_nan() {
        let context = Context::new();
        assert!(context.nth_root(-16.0, 4).is_nan());
    }

    #[test]
    fn test_nth_root_converges() {
        let context = Context::new();
        assert!((context.nth_root(2.0, 2) - std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!((context.nth_root(16.0, 4) - 2.0).abs() < 1e-9);
        assert_eq!(context.nth_root(5.5, 1), 5.5);
    }

    #[test]
    fn test_nth_root_fallback_without_iterations() {
        let mut context = Context::new();
        context.max_root_iterations = 0;
        assert!((context.nth_root(81.0, 4) - 3.0).abs() < 1e-9);
        assert!((context.nth_root(-27.0, 3) + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_detection() {
        let context = Context::new();
        assert_eq!(context.evaluate("16^(1/4)").unwrap(), 2.0);
        assert_eq!(context.evaluate("4^-(1/2)").unwrap(), 0.5);
        assert_eq!(context.evaluate("8^(-2/-3)").unwrap(), 4.0);
        assert_eq!(context.evaluate("8^(4/6)").unwrap(), 4.0);
    }

    #[test]
    fn test_top_level_slash() {
        assert_eq!(top_level_slash("1+1/2"), Some(3));
        assert_eq!(top_level_slash("(1/2)*4/3"), Some(7));
        assert_eq!(top_level_slash("(1/2)"), None);
        assert_eq!(top_level_slash("12"), None);
    }
}
