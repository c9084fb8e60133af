//! Error types and result aliases shared across Showreel components.

/// The result type used throughout Showreel.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Showreel infrastructure code.
///
/// Catalog aggregation failures have their own taxonomy in
/// `showreel-catalog`; this type covers configuration and server wiring.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided (configuration, arguments).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal error occurred that should not happen in normal operation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
