//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Weather provider error
    #[error("Weather service error: {0}")]
    Weather(String),

    /// Completion provider error
    #[error("Completion error: {0}")]
    Completion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_error_message() {
        let err = ApplicationError::Weather("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Weather service error: HTTP 500");
    }

    #[test]
    fn completion_error_message() {
        let err = ApplicationError::Completion("no choices".to_string());
        assert_eq!(err.to_string(), "Completion error: no choices");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::InvalidDuration(0).into();
        assert_eq!(err.to_string(), "Invalid duration: 0 days");
    }
}
