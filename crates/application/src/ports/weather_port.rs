//! Weather port - Interface for current-conditions lookup

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Normalized current conditions for a destination
///
/// Exists only for the duration of one generation request; the orchestrator
/// owns it and passes it by value into prompt construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Short condition phrase (e.g. "Sunny")
    pub description: String,
    /// Temperature in degrees Celsius
    pub temperature_celsius: f64,
}

/// Port for weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a free-text place name
    ///
    /// The location is forwarded as-is; the provider decides whether it is
    /// resolvable.
    async fn current_conditions(
        &self,
        location: &str,
    ) -> Result<WeatherSnapshot, ApplicationError>;

    /// Check if the weather provider is reachable
    async fn is_available(&self) -> bool;
}
