//! Weather data models
//!
//! Types for representing payloads from the Weatherstack API.

use serde::{Deserialize, Serialize};

/// Current conditions as reported by Weatherstack
///
/// Only the fields the packing workflow consumes are modeled; the provider
/// sends many more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Short condition phrases (e.g. "Sunny"); the first entry is the
    /// primary description
    pub weather_descriptions: Vec<String>,
}

impl CurrentConditions {
    /// Primary condition description, if the provider sent one
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.weather_descriptions.first().map(String::as_str)
    }
}

/// Provider-reported error
///
/// Weatherstack reports failures (bad key, unknown location) inside an
/// HTTP 200 body rather than via the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric error code (e.g. 101 invalid key, 615 request failed)
    pub code: u32,
    /// Machine-readable error category
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable explanation
    pub info: String,
}

/// Top-level Weatherstack response envelope
///
/// Exactly one of `current` or `error` is expected to be present.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Provider-reported error, if the request failed
    #[serde(default)]
    pub error: Option<ApiError>,
    /// Current conditions, on success
    #[serde(default)]
    pub current: Option<CurrentConditions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_uses_first_entry() {
        let current = CurrentConditions {
            temperature: 22.0,
            weather_descriptions: vec!["Sunny".to_string(), "Clear".to_string()],
        };
        assert_eq!(current.description(), Some("Sunny"));
    }

    #[test]
    fn description_empty_sequence() {
        let current = CurrentConditions {
            temperature: 22.0,
            weather_descriptions: vec![],
        };
        assert_eq!(current.description(), None);
    }

    #[test]
    fn deserialize_success_envelope() {
        let json = r#"{
            "request": {"type": "City", "query": "Paris, France"},
            "location": {"name": "Paris"},
            "current": {"temperature": 22, "weather_descriptions": ["Sunny"]}
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.error.is_none());
        let current = response.current.unwrap();
        assert!((current.temperature - 22.0).abs() < f64::EPSILON);
        assert_eq!(current.description(), Some("Sunny"));
    }

    #[test]
    fn deserialize_error_envelope() {
        let json = r#"{
            "success": false,
            "error": {"code": 615, "type": "request_failed", "info": "Your API request failed."}
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.current.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, 615);
        assert_eq!(error.error_type, "request_failed");
        assert_eq!(error.info, "Your API request failed.");
    }
}
