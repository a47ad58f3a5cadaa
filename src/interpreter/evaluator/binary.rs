use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Division by zero is not an error: `1/0` is `inf` and `0/0` is NaN.
    /// `^` uses `powf` with the left operand as base.
    ///
    /// # Example
    /// ```
    /// use exprwalk::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
