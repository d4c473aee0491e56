//! Errors that can occur while matching input.

/// Failures of the matcher itself, independent of whether the input fits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many node visits).
    #[error("runtime execution limit exceeded")]
    ExecFuelExhausted,

    /// Nesting went deeper than the recursion limit.
    #[error("runtime recursion limit exceeded")]
    RecursionLimitExceeded,

    /// The graph still contains a placeholder that was never resolved.
    #[error("unresolved reference to `{name}` reached during matching")]
    UnresolvedReference { name: String },

    /// A repetition succeeded without consuming input and would loop forever.
    #[error("repetition at position {position} matched without consuming input")]
    NonAdvancingRepeat { position: usize },
}

/// Input does not satisfy a tokenizer's grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// The root did not match at all. `position` is the furthest point any
    /// terminal was tried and failed.
    #[error("no match: unexpected {found} at position {position}")]
    NoMatch { position: usize, found: String },

    /// The root matched a prefix only.
    #[error(
        "input not fully consumed: matched {consumed} bytes, unexpected {found} at position {position}"
    )]
    Incomplete {
        consumed: usize,
        position: usize,
        found: String,
    },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl TokenizeError {
    /// Byte offset the error points at, when it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            TokenizeError::NoMatch { position, .. }
            | TokenizeError::Incomplete { position, .. } => Some(*position),
            TokenizeError::Runtime(RuntimeError::NonAdvancingRepeat { position }) => {
                Some(*position)
            }
            TokenizeError::Runtime(_) => None,
        }
    }
}
