//! Weatherstack weather client
//!
//! HTTP client for the Weatherstack current-conditions API.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiResponse, CurrentConditions};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider reported an error in the response body
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Weatherstack API base URL (default: <http://api.weatherstack.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API access key (sent as the `access_key` query parameter)
    ///
    /// A missing key is not special-cased: an empty key is sent and the
    /// provider rejects the request.
    #[serde(default, skip_serializing)]
    pub access_key: Option<SecretString>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.weatherstack.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a free-text place name
    ///
    /// The location is forwarded as-is; an empty or nonsensical string is
    /// the provider's problem to report.
    async fn current(&self, location: &str) -> Result<CurrentConditions, WeatherError>;

    /// Check if the weather service is reachable and the key is accepted
    async fn is_healthy(&self) -> bool;
}

/// Weatherstack HTTP client implementation
#[derive(Debug)]
pub struct WeatherstackClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherstackClient {
    /// Create a new Weatherstack client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn access_key(&self) -> &str {
        self.config
            .access_key
            .as_ref()
            .map_or("", ExposeSecret::expose_secret)
    }
}

#[async_trait]
impl WeatherClient for WeatherstackClient {
    #[instrument(skip(self), fields(location = %location))]
    async fn current(&self, location: &str) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/current", self.config.base_url);

        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", self.access_key()), ("query", location)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            warn!(status = %status, "Weather service unavailable");
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            warn!(status = %status, "Weather request rejected");
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        // Weatherstack signals failures inside 200 bodies
        if let Some(error) = api_response.error {
            warn!(code = error.code, info = %error.info, "Provider reported an error");
            return Err(WeatherError::ProviderError(error.info));
        }

        api_response.current.ok_or_else(|| {
            WeatherError::ParseError("No current conditions in response".to_string())
        })
    }

    async fn is_healthy(&self) -> bool {
        // Lightweight probe using a well-known city
        self.current("London").await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "http://api.weatherstack.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.access_key.is_none());
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: WeatherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://api.weatherstack.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_serialization_omits_access_key() {
        let config = WeatherConfig {
            access_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("access_key"));
    }

    #[test]
    fn client_creation() {
        let client = WeatherstackClient::new(WeatherConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn missing_access_key_sent_as_empty() {
        let client = WeatherstackClient::new(WeatherConfig::default()).unwrap();
        assert_eq!(client.access_key(), "");
    }

    #[test]
    fn access_key_exposed_for_query() {
        let config = WeatherConfig {
            access_key: Some(SecretString::from("abc123")),
            ..Default::default()
        };
        let client = WeatherstackClient::new(config).unwrap();
        assert_eq!(client.access_key(), "abc123");
    }

    #[test]
    fn weather_error_display() {
        let err = WeatherError::ProviderError("Your API request failed.".to_string());
        assert_eq!(err.to_string(), "Provider error: Your API request failed.");

        let err = WeatherError::ServiceUnavailable("HTTP 500".to_string());
        assert!(err.to_string().contains("HTTP 500"));
    }
}
