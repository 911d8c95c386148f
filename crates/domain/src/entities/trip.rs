//! Trip request entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// User-supplied parameters describing a trip
///
/// Validated at construction and immutable afterwards; a single request
/// drives exactly one checklist generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination as a human-readable place name
    location: String,
    /// Trip length in days (at least 1)
    duration_days: u32,
    /// Free-text trip category (e.g. "business", "leisure")
    trip_type: String,
}

impl TripRequest {
    /// Create a new trip request with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if the location is empty or
    /// blank, and `DomainError::InvalidDuration` if the duration is zero.
    pub fn new(
        location: impl Into<String>,
        duration_days: u32,
        trip_type: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(DomainError::InvalidLocation(
                "location must not be empty".to_string(),
            ));
        }
        if duration_days == 0 {
            return Err(DomainError::InvalidDuration(duration_days));
        }
        Ok(Self {
            location,
            duration_days,
            trip_type: trip_type.into(),
        })
    }

    /// Get the destination
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Get the trip length in days
    #[must_use]
    pub const fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Get the trip category
    #[must_use]
    pub fn trip_type(&self) -> &str {
        &self.trip_type
    }
}

impl fmt::Display for TripRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} days ({})",
            self.location, self.duration_days, self.trip_type
        )
    }
}
