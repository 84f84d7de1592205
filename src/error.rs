/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, premature end of input, malformed string
/// interpolation and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree.
/// Runtime errors include undefined variables, writes to immutable bindings,
/// type mismatches, arity violations and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error returned by [`crate::evaluate_program`].
///
/// Syntax errors are rendered as `path:line:column: message`; runtime errors
/// are rendered as their bare message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed; the evaluator never ran.
    #[error("{path}:{line}:{column}: {error}",
            line = .error.position().line,
            column = .error.position().column)]
    Syntax {
        /// The path (or pseudo path) the source was read from.
        path:  String,
        /// The underlying parse failure.
        error: ParseError,
    },
    /// Evaluation started and was aborted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
