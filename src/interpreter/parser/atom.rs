use crate::{
    ast::{Expr, VARIABLE_NAME},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
        },
    },
};

/// Parses an atom, the smallest operand of the grammar.
///
/// Dispatches on the current token:
/// - a number starts a literal,
/// - `(` starts a grouped subexpression,
/// - `x` is the variable,
/// - any other identifier starts a function call.
///
/// Grammar:
/// ```text
/// atom := number | "(" expression ")" | "x" | identifier "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the cursor is exhausted.
/// - `UnrecognizedAtom` if the current token is an operator or `)`.
/// - Propagates errors from the selected alternative.
pub fn parse_atom(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    match tokens.peek()? {
        Token::Number(_) => parse_literal(tokens),
        Token::LeftParen => parse_grouping(tokens),
        Token::Identifier(name) if name == VARIABLE_NAME => {
            tokens.consume()?;
            Ok(Expr::Variable)
        },
        Token::Identifier(_) => parse_function_call(tokens),
        tok @ (Token::Operator(_) | Token::RightParen) => {
            Err(ParseError::UnrecognizedAtom { token:    tok.to_string(),
                                               position: tokens.position(), })
        },
    }
}

/// Parses a numeric literal.
///
/// The lexer keeps numbers as raw text; this is where they are converted.
///
/// # Errors
/// `InvalidNumber` if the lexeme is not a valid `f64` literal (e.g. `2x`).
fn parse_literal(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.position();
    match tokens.consume()? {
        Token::Number(text) => {
            text.parse::<f64>()
                .map(Expr::number)
                .map_err(|_| ParseError::InvalidNumber { literal: text.clone(),
                                                         position })
        },
        tok => Err(ParseError::UnrecognizedAtom { token: tok.to_string(),
                                                  position }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Errors
/// `NestingTooDeep` once groups nest past
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::cursor::MAX_NESTING_DEPTH).
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    tokens.expect(&Token::LeftParen)?;
    tokens.enter_nesting()?;
    let expr = parse_expression(tokens)?;
    tokens.expect(&Token::RightParen)?;
    tokens.leave_nesting();
    Ok(expr)
}

/// Parses a single-argument function call such as `sin(x)`.
///
/// The name is not checked against the known builtins; unknown names are
/// accepted here and evaluate to `0.0`.
///
/// # Errors
/// `UnexpectedToken` if the name is not followed by `(` or the argument is not
/// closed by `)`.
fn parse_function_call(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = tokens.position();
    let name = match tokens.consume()? {
        Token::Identifier(name) => name.clone(),
        tok => {
            return Err(ParseError::UnrecognizedAtom { token: tok.to_string(),
                                                      position });
        },
    };

    tokens.expect(&Token::LeftParen)?;
    tokens.enter_nesting()?;
    let argument = parse_expression(tokens)?;
    tokens.expect(&Token::RightParen)?;
    tokens.leave_nesting();
    tokens.check_tree_depth(argument.depth() + 1)?;

    Ok(Expr::call(name, argument))
}
