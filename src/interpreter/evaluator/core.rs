use crate::{ast::Expr, interpreter::evaluator::function::UNKNOWN_FUNCTION_VALUE};

/// Evaluation context.
///
/// Binds the implicit variable `x`. Evaluation only reads the tree, so one
/// parsed expression can be evaluated under any number of contexts, including
/// from several threads at once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Context {
    /// Value bound to `x`.
    pub x: f64,
}

impl Context {
    /// Creates a context binding `x`.
    #[must_use]
    pub const fn new(x: f64) -> Self {
        Self { x }
    }

    /// Evaluates an expression tree.
    ///
    /// Total: numeric edge cases propagate as infinities or NaN.
    ///
    /// # Example
    /// ```
    /// use exprwalk::{interpreter::evaluator::core::Context, parse};
    ///
    /// let expr = parse("x*x+1").unwrap();
    /// assert_eq!(Context::new(3.0).eval_expr(&expr), 10.0);
    /// ```
    #[must_use]
    pub fn eval_expr(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Number { value } => *value,
            Expr::Variable => self.x,
            Expr::FunctionCall { name, argument } => {
                let arg = self.eval_expr(argument);
                match expr.function() {
                    Some(function) => Self::eval_function(function, arg),
                    None => {
                        tracing::trace!(name, "unknown function evaluates to fallback");
                        UNKNOWN_FUNCTION_VALUE
                    },
                }
            },
            Expr::BinaryOp { left, op, right } => {
                let l = self.eval_expr(left);
                let r = self.eval_expr(right);
                Self::eval_binary(*op, l, r)
            },
        }
    }
}

impl Expr {
    /// Evaluates the tree with `x` bound to the given value.
    ///
    /// # Example
    /// ```
    /// let expr = exprwalk::parse("(1+2)*3").unwrap();
    /// assert_eq!(expr.evaluate(0.0), 9.0);
    /// assert_eq!(expr.evaluate(7.0), 9.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        Context::new(x).eval_expr(self)
    }
}
