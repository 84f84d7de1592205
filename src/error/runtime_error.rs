use crate::ast::Position;

/// Represents all errors that can occur during evaluation.
///
/// Every error aborts the evaluation; the language has no way to catch them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name was looked up or assigned but no reachable scope binds it.
    #[error("undefined variable '{name}' at {position}")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the lookup happened.
        position: Position,
    },
    /// Assignment to a binding declared without `mut`.
    #[error("cannot assign to immutable variable '{name}' at {position}")]
    ImmutableBinding {
        /// The name of the variable.
        name:     String,
        /// Where the assignment happened.
        position: Position,
    },
    /// A value had the wrong type for the operation.
    #[error("type error at {position}: expected {expected}, found {found}")]
    TypeError {
        /// What the operation needed.
        expected: &'static str,
        /// The type name of the value it got.
        found:    &'static str,
        /// Where the operation happened.
        position: Position,
    },
    /// A function was invoked with fewer arguments than it declares.
    #[error("function expects {expected} argument(s) but {found} were given at {position}")]
    ArityError {
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments at the call site.
        found:    usize,
        /// Where the call happened.
        position: Position,
    },
    /// Integer division or remainder with a zero divisor.
    #[error("division by zero at {position}")]
    DivisionByZero {
        /// Where the operation happened.
        position: Position,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("integer overflow at {position}")]
    Overflow {
        /// Where the operation happened.
        position: Position,
    },
    /// A number literal does not fit in a 64-bit integer.
    #[error("number literal '{text}' is too large at {position}")]
    LiteralTooLarge {
        /// The literal text.
        text:     String,
        /// Where the literal is.
        position: Position,
    },
    /// A `.name` access found no such property on the receiver.
    #[error("unknown property '{name}' on {receiver} at {position}")]
    UnknownProperty {
        /// The property name.
        name:     String,
        /// The type name of the receiver.
        receiver: &'static str,
        /// Where the access happened.
        position: Position,
    },
    /// The built-in `assert` received a falsy value.
    #[error("assertion failed at {position}")]
    AssertionFailed {
        /// The call site of `assert`.
        position: Position,
    },
    /// Call nesting went past the configured limit.
    #[error("maximum call depth of {limit} exceeded at {position}")]
    CallDepthExceeded {
        /// The configured limit.
        limit:    usize,
        /// The call that went over it.
        position: Position,
    },
    /// A built-in could not write its output.
    #[error("output error: {details}")]
    Output {
        /// The underlying I/O error.
        details: String,
    },
    /// The evaluator found its own state inconsistent. Never caused by user
    /// code.
    #[error("internal error: {details}")]
    Internal {
        /// What went wrong.
        details: String,
    },
}
