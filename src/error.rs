/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// an expression tree: missing tokens, mismatched tokens, malformed operands,
/// invalid numeric literals, and leftover input.
pub mod parse_error;
/// Sampling errors.
///
/// Evaluation itself is total; the only runtime failures come from rejecting a
/// malformed sampling range before any evaluation happens.
pub mod sample_error;

pub use parse_error::ParseError;
pub use sample_error::SampleError;
