use crate::{error::ParseError, interpreter::lexer::Token, interpreter::parser::core::ParseResult};

/// Deepest nesting the parser accepts.
///
/// Bounds both the open groups and call arguments during parsing and the
/// height of every node built, since evaluation, rendering and dropping all
/// recurse over the tree.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Read position over a borrowed token sequence.
///
/// The position only moves forward, one token per [`consume`](Self::consume),
/// and always stays within `0..=tokens.len()`. The cursor also counts the open
/// groups and call arguments.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    position: usize,
    depth:    usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               position: 0,
               depth:    0, }
    }

    /// Index of the next token to be read.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Enters a parenthesized group or call argument.
    ///
    /// Call [`leave_nesting`](Self::leave_nesting) once the closing `)` has
    /// been consumed.
    ///
    /// # Errors
    /// `NestingTooDeep` if more than [`MAX_NESTING_DEPTH`] levels are open.
    pub fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position: self.position,
                                                    limit:    MAX_NESTING_DEPTH, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost group or call argument.
    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks the height of a node about to be built.
    ///
    /// # Errors
    /// `NestingTooDeep` if `height` exceeds [`MAX_NESTING_DEPTH`].
    pub fn check_tree_depth(&self, height: usize) -> ParseResult<usize> {
        if height > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position: self.position,
                                                    limit:    MAX_NESTING_DEPTH, });
        }
        Ok(height)
    }

    /// True once every token has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.position == self.tokens.len()
    }

    /// Returns the current token without advancing.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if no tokens remain.
    pub fn peek(&self) -> ParseResult<&'a Token> {
        self.tokens
            .get(self.position)
            .ok_or(ParseError::UnexpectedEndOfInput { position: self.position })
    }

    /// Returns the current operator character, if the current token is one.
    ///
    /// Unlike [`peek`](Self::peek) this never fails; the end of input simply
    /// has no operator.
    #[must_use]
    pub fn peek_operator(&self) -> Option<char> {
        self.tokens.get(self.position).and_then(Token::operator)
    }

    /// Returns the current token and advances past it.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if no tokens remain.
    pub fn consume(&mut self) -> ParseResult<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Ok(token)
    }

    /// Consumes the current token and requires it to equal `expected`.
    ///
    /// The token is consumed even on mismatch, and the mismatch aborts the
    /// parse with `UnexpectedToken`.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if no tokens remain.
    /// - `UnexpectedToken` if the consumed token differs from `expected`.
    ///
    /// # Example
    /// ```
    /// use exprwalk::{
    ///     error::ParseError,
    ///     interpreter::{lexer::{Token, tokenize}, parser::cursor::TokenCursor},
    /// };
    ///
    /// let tokens = tokenize("(]");
    /// let mut cursor = TokenCursor::new(&tokens);
    /// assert!(cursor.expect(&Token::LeftParen).is_ok());
    /// assert!(matches!(cursor.expect(&Token::RightParen),
    ///                  Err(ParseError::UnexpectedToken { position: 1, .. })));
    /// assert!(cursor.at_end());
    /// ```
    pub fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        let position = self.position;
        let found = self.consume()?;
        if found == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found: found.to_string(),
                                              position })
        }
    }
}
