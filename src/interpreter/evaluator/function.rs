use crate::{ast::Function, interpreter::evaluator::core::Context};

/// Result of calling a function the evaluator does not know.
pub const UNKNOWN_FUNCTION_VALUE: f64 = 0.0;

impl Context {
    /// Applies a builtin function to an evaluated argument.
    ///
    /// Names are resolved with [`Expr::function`](crate::ast::Expr::function)
    /// at evaluation time rather than at parse time; a call to any other name
    /// yields [`UNKNOWN_FUNCTION_VALUE`] without reaching this function.
    ///
    /// # Example
    /// ```
    /// use exprwalk::{ast::Function, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_function(Function::Sin, 0.0), 0.0);
    /// ```
    #[must_use]
    pub fn eval_function(function: Function, argument: f64) -> f64 {
        match function {
            Function::Sin => argument.sin(),
        }
    }
}
