//! Errors raised by pool construction, queries and feedback

use crate::core::{InvalidSymbol, WordError};
use std::fmt;

/// Error type for word pool operations
///
/// Every variant is raised before the pool is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A word, guess or feedback string does not match the pool's word length
    LengthMismatch {
        subject: &'static str,
        expected: usize,
        found: usize,
    },
    /// Feedback contained a symbol outside absent/present/correct
    InvalidSymbol(InvalidSymbol),
    /// The pool (or the requested subset of it) has no words
    EmptyPool,
    /// A position outside `0..word_length`
    OutOfRange { position: usize, length: usize },
    /// Input text could not be turned into a word
    InvalidWord(WordError),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                subject,
                expected,
                found,
            } => write!(
                f,
                "{subject} must be {expected} characters long, got {found}"
            ),
            Self::InvalidSymbol(err) => write!(f, "{err}"),
            Self::EmptyPool => write!(f, "No words remain in the pool"),
            Self::OutOfRange { position, length } => write!(
                f,
                "Position {position} is outside a word of length {length}"
            ),
            Self::InvalidWord(err) => write!(f, "Invalid word: {err}"),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSymbol(err) => Some(err),
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidSymbol> for PoolError {
    fn from(err: InvalidSymbol) -> Self {
        Self::InvalidSymbol(err)
    }
}

impl From<WordError> for PoolError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}
