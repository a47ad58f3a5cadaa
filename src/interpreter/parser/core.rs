use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, cursor::TokenCursor},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_additive(tokens)
}

/// Parses a complete token sequence into a single expression.
///
/// The cursor must reach the end of the sequence once the top-level
/// expression is parsed. An empty sequence is reported as
/// `UnexpectedEndOfInput` at position 0.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - Any error raised by the grammar rules.
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);
    let expr = parse_expression(&mut cursor)?;

    if cursor.at_end() {
        Ok(expr)
    } else {
        let position = cursor.position();
        let token = cursor.peek()?;
        Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                   position })
    }
}
