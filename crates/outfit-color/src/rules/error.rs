//! Error types for rule table construction

use std::fmt;

/// Error type for rule table validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No rules provided
    Empty,
    /// Score above 100 at the specified index
    ScoreOutOfRange {
        /// Index of the offending entry
        index: usize,
        /// Score that was given
        score: u8,
    },
    /// Entry at the specified index names `unknown`
    UnknownColor {
        /// Index of the offending entry
        index: usize,
    },
    /// Pair at the specified index was already defined (in either order)
    DuplicatePair {
        /// Index where the duplicate was found
        index: usize,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::Empty => write!(f, "rule table cannot be empty"),
            RuleError::ScoreOutOfRange { index, score } => {
                write!(f, "score {} at index {} exceeds 100", score, index)
            }
            RuleError::UnknownColor { index } => {
                write!(f, "rule at index {} uses the unknown color", index)
            }
            RuleError::DuplicatePair { index } => {
                write!(f, "duplicate color pair found at index {}", index)
            }
        }
    }
}

impl std::error::Error for RuleError {}
