/// Binary operator evaluation logic.
///
/// Applies `+ - * /` arithmetically and `^` as floating-point power.
pub mod binary;

/// Core evaluation logic and context.
///
/// Holds the value bound to `x` and folds expression trees into numbers.
pub mod core;

/// Function call evaluation.
///
/// Dispatches known builtin names and neutralizes unknown ones.
pub mod function;

/// Range sampling.
///
/// Evaluates one expression at evenly spaced points of `x`.
pub mod sample;
