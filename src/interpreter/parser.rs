/// Core parsing entry points.
///
/// Declares the shared `ParseResult` alias, the top-level expression rule,
/// and the full-sequence parse that rejects trailing tokens.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from addition down to exponentiation,
/// each folding its operands into a left-leaning tree.
pub mod binary;

/// Atom parsing.
///
/// Number literals, the variable `x`, parenthesized groups, and function
/// calls.
pub mod atom;

/// The token cursor.
///
/// Tracks the read position and provides `peek`, `consume`, `expect` and
/// `at_end` to the grammar rules.
pub mod cursor;
