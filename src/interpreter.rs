/// The evaluator module computes numeric results from expression trees.
///
/// Evaluation binds the implicit variable `x` to a value and folds the tree
/// bottom-up. It never fails: division by zero and other numeric edge cases
/// produce IEEE infinities or NaN.
///
/// # Responsibilities
/// - Evaluates every AST node kind against a bound `x`.
/// - Applies the known builtin functions, falling back to `0.0` otherwise.
/// - Samples an expression across a range of `x` values.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer strips whitespace and splits the remaining characters at the
/// operator and parenthesis delimiters, producing numbers, identifiers,
/// operators, and parentheses.
///
/// # Responsibilities
/// - Converts the input character stream into an ordered token sequence.
/// - Never fails; malformed text is left for the parser to reject.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over a cursor into the token sequence,
/// one function per grammar rule, encoding operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Reports malformed input as a structured `ParseError` with the offending
///   token position.
pub mod parser;
