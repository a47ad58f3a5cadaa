use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::parser::{atom::parse_atom, core::ParseResult, cursor::TokenCursor},
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Each folded operator deepens the left-leaning tree by one level; a fold
/// that would exceed the nesting limit fails with `NestingTooDeep`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    let mut height = left.depth();
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        tokens.consume()?;
        let right = parse_multiplicative(tokens)?;
        height = tokens.check_tree_depth(height.max(right.depth()) + 1)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_exponent(tokens)?;
    let mut height = left.depth();
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Mul, BinaryOperator::Div]) {
        tokens.consume()?;
        let right = parse_exponent(tokens)?;
        height = tokens.check_tree_depth(height.max(right.depth()) + 1)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation chains fold left to right like the other levels, and the
/// exponent is always a single atom: `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// The rule is: `exponent := atom ("^" atom)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An exponentiation expression tree.
///
/// # Example
/// ```
/// let expr = exprwalk::parse("2^3^2").unwrap();
/// assert_eq!(expr.render(), "(^,(^,2,3),2)");
/// assert_eq!(expr.evaluate(0.0), 64.0);
/// ```
pub fn parse_exponent(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_atom(tokens)?;
    let mut height = left.depth();
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Pow]) {
        tokens.consume()?;
        let right = parse_atom(tokens)?;
        height = tokens.check_tree_depth(height.max(right.depth()) + 1)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Returns the operator under the cursor when it belongs to `accepted`.
///
/// Does not advance the cursor.
fn next_operator(tokens: &TokenCursor<'_>, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
    tokens.peek_operator()
          .and_then(BinaryOperator::from_char)
          .filter(|op| accepted.contains(op))
}
