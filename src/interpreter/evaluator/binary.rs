use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a binary arithmetic operation between two values.
    ///
    /// Division follows IEEE semantics: a zero divisor yields infinity or NaN
    /// rather than an error. `Pow` here is the plain `f64::powf`; the `^` of an
    /// expression goes through [`Context::eval_pow`] instead, which needs the
    /// exponent's tree to tell fractions from integers.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use radica::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Sub, 10.0, 4.0), 6.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            Pow => left.powf(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_is_total() {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        assert_eq!(Context::eval_binary(Add, 1.5, 2.0), 3.5);
        assert_eq!(Context::eval_binary(Mul, -3.0, 2.0), -6.0);
        assert_eq!(Context::eval_binary(Div, -1.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(Context::eval_binary(Sub, 0.0, 0.0), 0.0);
        assert_eq!(Context::eval_binary(Pow, 2.0, 3.0), 8.0);
        assert!(Context::eval_binary(Pow, -8.0, 1.0 / 3.0).is_nan());
    }
}
