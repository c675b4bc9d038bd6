//! Error types for the algorithm library

use thiserror::Error;

/// Errors raised by the precondition gates of every algorithm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KataError {
    /// Input violates the operation's precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl KataError {
    /// Build an [`KataError::InvalidArgument`] from any message
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        KataError::InvalidArgument(msg.into())
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, KataError>;
