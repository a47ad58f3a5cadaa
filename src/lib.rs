//! # exprwalk
//!
//! exprwalk parses single-variable arithmetic expressions such as
//! `sin(x) * 2 + 1` into an abstract syntax tree, renders the tree in a
//! fully parenthesized prefix form, and evaluates it for any value of `x`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::sample::{Sample, SampleRange, sample},
        lexer::tokenize,
        parser::core::parse_tokens,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operator and function types.
/// The AST is built by the parser and consumed by the evaluator and the
/// prefix-form renderer.
///
/// # Responsibilities
/// - Defines the four expression node kinds.
/// - Enumerates the binary operators and known builtin functions.
/// - Renders trees in a deterministic prefix form for inspection.
pub mod ast;
/// Provides error types for parsing and sampling.
///
/// Parse errors identify the failure kind and the position of the offending
/// token. Evaluation has no error type because it cannot fail.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Splits raw text into tokens.
/// - Builds expression trees by recursive descent.
/// - Evaluates trees against a bound `x` and samples them over ranges.
pub mod interpreter;

/// Parses an expression string into a tree.
///
/// The whole input must form one expression; leftover tokens are an error.
///
/// # Errors
/// Returns a `ParseError` describing the first structural problem found,
/// including empty input (`UnexpectedEndOfInput`).
///
/// # Examples
/// ```
/// use exprwalk::{error::ParseError, parse};
///
/// let expr = parse("sin(x) + 1").unwrap();
/// assert_eq!(expr.render(), "(+,sin(x),1)");
///
/// assert!(matches!(parse("(1+2"), Err(ParseError::UnexpectedEndOfInput { .. })));
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input);
    tracing::debug!(tokens = tokens.len(), "parsing expression");

    let expr = parse_tokens(&tokens)?;
    tracing::debug!(tree = %expr, "parsed expression");
    Ok(expr)
}

/// Settings for [`get_result`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOptions {
    /// Point at which the headline value is computed.
    pub at:    f64,
    /// Range swept after the headline evaluation.
    pub range: SampleRange,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { at:    1.0,
               range: SampleRange::default(), }
    }
}

/// Everything computed for one input expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The parsed tree.
    pub expr:     Expr,
    /// Prefix rendering of `expr`.
    pub rendered: String,
    /// `expr` evaluated at [`RunOptions::at`].
    pub value:    f64,
    /// `expr` evaluated across [`RunOptions::range`].
    pub samples:  Vec<Sample>,
}

/// Parses, renders, evaluates and samples one expression.
///
/// # Errors
/// Returns an error if parsing fails or the sampling range is invalid.
///
/// # Examples
/// ```
/// use exprwalk::{RunOptions, get_result};
///
/// let report = get_result("5 + 2 - 2", RunOptions::default()).unwrap();
/// assert_eq!(report.rendered, "(-,(+,5,2),2)");
/// assert_eq!(report.value, 5.0);
/// assert_eq!(report.samples.len(), 201);
///
/// assert!(get_result("+", RunOptions::default()).is_err());
/// ```
pub fn get_result(source: &str, options: RunOptions) -> Result<Report, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    let rendered = expr.render();
    let value = expr.evaluate(options.at);
    let samples = sample(&expr, options.range)?;

    Ok(Report { expr,
                rendered,
                value,
                samples })
}
