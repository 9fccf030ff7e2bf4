//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather service could not be reached or answered with an error status
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The weather service answered with data that cannot be displayed
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error comes from the outside world
    ///
    /// External failures end a lookup quietly and leave the previous view
    /// on screen. Everything else is a contract violation for the caller.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            ApplicationError::NetworkFailure(_) | ApplicationError::MalformedResponse(_)
        )
    }
}
