use thiserror::Error;

/// Everything that can stop bracketex from producing a verdict.
///
/// An unbalanced string is *not* an error: it is the `Invalid` verdict.
/// These variants only cover input that can't be judged at all.
#[derive(Debug, Error)]
pub enum BracketError {
    /// A character outside `{}[]()` under the strict policy.
    ///
    /// # Example
    /// Input: `3 (a)` → UnknownCharacter('a')
    #[error("'{0}' is not a bracket")]
    UnknownCharacter(char),

    /// The declared length doesn't match the bracket string under the strict policy.
    #[error("Expected {expected} brackets, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Missing bracket count")]
    MissingLength,

    #[error("Invalid bracket count: '{0}'")]
    InvalidLength(String),

    #[error("Configuration file not found")]
    ConfigNotFound,

    #[error("Configuration parsing error: {0}")]
    ParsingError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
