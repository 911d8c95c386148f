//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{WeatherPort, WeatherSnapshot};
use async_trait::async_trait;
use integration_weather::{
    CurrentConditions, WeatherClient, WeatherConfig, WeatherError, WeatherstackClient,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the Weatherstack API
pub struct WeatherAdapter {
    client: WeatherstackClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherstackClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = WeatherstackClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ProviderError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Weather(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Convert provider conditions to the normalized snapshot
    ///
    /// The provider always sends at least one description phrase; an empty
    /// list is treated as a malformed response.
    fn map_conditions(conditions: &CurrentConditions) -> Result<WeatherSnapshot, ApplicationError> {
        let description = conditions.description().ok_or_else(|| {
            ApplicationError::Internal("No weather description in response".to_string())
        })?;

        Ok(WeatherSnapshot {
            description: description.to_string(),
            temperature_celsius: conditions.temperature,
        })
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn current_conditions(
        &self,
        location: &str,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self.client.current(location).await.map_err(Self::map_error);

        match &result {
            Ok(conditions) => {
                debug!(
                    temperature = conditions.temperature,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.and_then(|c| Self::map_conditions(&c))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(descriptions: Vec<&str>, temperature: f64) -> CurrentConditions {
        CurrentConditions {
            temperature,
            weather_descriptions: descriptions.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn new_creates_adapter() {
        let adapter = WeatherAdapter::new(WeatherConfig::default());
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::new(WeatherConfig::default()).unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("WeatherAdapter"));
    }

    #[test]
    fn map_conditions_takes_first_description() {
        let snapshot =
            WeatherAdapter::map_conditions(&conditions(vec!["Sunny", "Clear"], 22.0)).unwrap();
        assert_eq!(snapshot.description, "Sunny");
        assert!((snapshot.temperature_celsius - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn map_conditions_rejects_empty_descriptions() {
        let result = WeatherAdapter::map_conditions(&conditions(vec![], 22.0));
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }

    #[test]
    fn map_error_provider_error() {
        let err = WeatherError::ProviderError("Your API request failed.".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Weather(_)));
    }

    #[test]
    fn map_error_connection_failed() {
        let err = WeatherError::ConnectionFailed("timeout".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Weather(_)));
    }

    #[test]
    fn map_error_parse_error() {
        let err = WeatherError::ParseError("bad json".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Internal(_)));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
