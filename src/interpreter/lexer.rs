use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
///
/// The lexer only ever sees whitespace-free input, so every character is
/// either one of the delimiters `+ - * / ^ ( )` or part of a run of
/// non-delimiter characters. Such a run becomes a [`Token::Number`] when it
/// starts with a digit and a [`Token::Identifier`] otherwise.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric lexeme such as `42` or `3.14`, kept as written.
    ///
    /// Conversion to `f64` happens in the parser, so a malformed run like
    /// `2x` is still a token here.
    #[regex(r"[0-9][^+\-*/()\^]*", |lex| lex.slice().to_string(), allow_greedy = true)]
    Number(String),
    /// Identifier tokens, such as the variable `x` or the function name `sin`.
    #[regex(r"[^0-9+\-*/()\^][^+\-*/()\^]*", |lex| lex.slice().to_string(), allow_greedy = true)]
    Identifier(String),
    /// One of `+`, `-`, `*`, `/`, `^`.
    #[regex(r"[+\-*/\^]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl Token {
    /// Returns the operator character if this is an [`Token::Operator`].
    #[must_use]
    pub const fn operator(&self) -> Option<char> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Splits raw input into tokens.
///
/// All whitespace is removed first, including whitespace inside what would
/// otherwise be an identifier (`s i n` lexes as `sin`). The function is total:
/// malformed input still yields a best-effort token list and is rejected later
/// by the parser. Empty input yields an empty vector.
///
/// # Example
/// ```
/// use exprwalk::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("sin(x) * 2");
/// assert_eq!(tokens,
///            vec![Token::Identifier("sin".into()),
///                 Token::LeftParen,
///                 Token::Identifier("x".into()),
///                 Token::RightParen,
///                 Token::Operator('*'),
///                 Token::Number("2".into())]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&cleaned);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            // Unreachable for whitespace-free input; keep the text so the
            // parser can report it.
            Err(()) => tokens.push(Token::Identifier(lexer.slice().to_string())),
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    tokens
}
