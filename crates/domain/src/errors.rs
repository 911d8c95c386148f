//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Destination location is empty or blank
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Trip duration must be at least one day
    #[error("Invalid duration: {0} days")]
    InvalidDuration(u32),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
