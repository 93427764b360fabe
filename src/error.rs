//! Error types for the Mastermind solver

use thiserror::Error;

/// Errors raised by the code space, the scoring function and the solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// The alphabet/length/duplicates combination cannot form a game
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Pruning left no candidate consistent with the feedback history
    #[error(
        "no candidates remain after {observations} feedback observations; the feedback sequence is inconsistent"
    )]
    DomainExhausted { observations: usize },

    /// Guess and target have different lengths
    #[error("code length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A symbol outside the configured alphabet
    #[error("invalid symbol '{symbol}' for an alphabet of {alphabet_size} symbols")]
    InvalidSymbol { symbol: char, alphabet_size: usize },

    /// A code that cannot occur under the configured rules
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// Feedback that is malformed or impossible for the code length
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MastermindError>;
