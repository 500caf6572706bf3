use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        normalize::normalize_signs,
    },
};

impl Context {
    /// Evaluates two operands written side by side with no operator.
    ///
    /// Each operand is turned into text (a literal as written, anything else
    /// as the decimal form of its value), the two texts are joined, their
    /// signs collapsed, and the result is read again as an expression. So
    /// `2(3)` is `23`, `(1/2)(3)` is `0.53` and `2(-3)` is `2-3`.
    ///
    /// # Errors
    /// Returns an error when the joined text is not a valid expression, for
    /// example `(0.5)(0.5)` which reads as `0.50.5`.
    ///
    /// # Example
    /// ```
    /// use radica::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.evaluate("2(3)").unwrap(), 23.0);
    /// assert_eq!(context.evaluate("(1+1)(2)^2").unwrap(), 484.0);
    /// ```
    pub fn eval_adjacent(&self, left: &Expr, right: &Expr, source: &str) -> EvalResult<f64> {
        let joined = format!("{}{}",
                             self.operand_text(left, source)?,
                             self.operand_text(right, source)?);
        let joined = normalize_signs(&joined);
        tracing::trace!(%joined, "joining adjacent operands");

        self.eval_text(&joined)
    }

    fn operand_text(&self, expr: &Expr, source: &str) -> EvalResult<String> {
        match expr {
            Expr::Literal { span, .. } => Ok(span.text(source).to_string()),
            other => Ok(self.eval(other, source)?.to_string()),
        }
    }
}
