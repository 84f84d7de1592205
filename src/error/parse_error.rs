use crate::ast::Position;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// A description of what was found and what was expected.
        token:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while a construct was still open.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput {
        /// The position just past the last token.
        position: Position,
    },
    /// The lexer could not make sense of a character sequence.
    #[error("unrecognized input '{text}'")]
    UnrecognizedInput {
        /// The offending text.
        text:     String,
        /// Where it starts.
        position: Position,
    },
    /// A `${` inside a double-quoted string was never closed.
    #[error("unterminated interpolation in string")]
    UnterminatedInterpolation {
        /// Where the `${` starts.
        position: Position,
    },
    /// The left-hand side of `=` is neither a name nor a property access.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget {
        /// Where the target starts.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnrecognizedInput { position, .. }
            | Self::UnterminatedInterpolation { position }
            | Self::InvalidAssignmentTarget { position } => *position,
        }
    }
}
