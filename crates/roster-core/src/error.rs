//! Error types for Roster.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Roster.
#[derive(Error, Debug)]
pub enum Error {
    /// Name was empty after trimming.
    #[error("Name must not be empty")]
    EmptyName,

    /// Age is outside the accepted range.
    #[error("Age out of range: {age} (expected {min}..={max})")]
    AgeOutOfRange {
        /// The rejected age.
        age: i64,
        /// Lowest accepted age.
        min: u32,
        /// Highest accepted age.
        max: u32,
    },

    /// Age text could not be parsed as an integer.
    #[error("Invalid age: {input:?}")]
    InvalidAge {
        /// The raw text that was rejected.
        input: String,
    },

    /// The user directory could not produce its listing.
    #[error("Directory error: {message}")]
    Directory {
        /// Error message.
        message: String,
    },

    /// No id is left for a new record.
    #[error("Id counter exhausted after {last}")]
    IdsExhausted {
        /// Highest id already issued.
        last: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this error came from input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::AgeOutOfRange { .. } | Self::InvalidAge { .. }
        )
    }

    /// Creates a directory error with the given message.
    #[must_use]
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }
}
