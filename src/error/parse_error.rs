#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every variant carries the index of the offending token in the token
/// sequence produced by the lexer.
pub enum ParseError {
    /// A token was required but the token sequence was exhausted.
    UnexpectedEndOfInput {
        /// Token index at which input ran out.
        position: usize,
    },
    /// A specific token was structurally required but another was found.
    UnexpectedToken {
        /// The token the grammar required.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// Token index of `found`.
        position: usize,
    },
    /// No operand form matches the token in operand position.
    UnrecognizedAtom {
        /// The token encountered.
        token:    String,
        /// Token index of `token`.
        position: usize,
    },
    /// A number token could not be converted to a floating-point value.
    InvalidNumber {
        /// The raw numeric lexeme.
        literal:  String,
        /// Token index of the literal.
        position: usize,
    },
    /// The expression nests deeper than the parser accepts.
    NestingTooDeep {
        /// Token index at which the limit was reached.
        position: usize,
        /// The maximum accepted depth.
        limit:    usize,
    },
    /// A complete expression was parsed but tokens remain.
    UnexpectedTrailingTokens {
        /// The first unconsumed token.
        token:    String,
        /// Token index of `token`.
        position: usize,
    },
}

impl ParseError {
    /// Token index the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnrecognizedAtom { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at token {position}: Unexpected end of input.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at token {position}: Expected '{expected}' but found '{found}'."),

            Self::UnrecognizedAtom { token, position } => write!(f,
                                                                 "Error at token {position}: Expected a number, 'x', a function call or '(' but found '{token}'."),

            Self::InvalidNumber { literal, position } => {
                write!(f, "Error at token {position}: Invalid number literal: {literal}.")
            },

            Self::NestingTooDeep { position, limit } => write!(f,
                                                               "Error at token {position}: Expression nesting is too deep (maximum {limit} levels)."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at token {position}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
