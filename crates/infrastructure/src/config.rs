//! Application configuration
//!
//! Layered loading: compiled defaults, then an optional `config.toml`,
//! then `PACKPILOT_*` environment variables.

use ai_core::CompletionConfig;
use application::TruncationPolicy;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Checklist generation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistConfig {
    /// How to treat a recommendation cut off by the output token budget
    #[serde(default)]
    pub truncation: TruncationPolicy,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Completion provider configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Checklist generation configuration
    #[serde(default)]
    pub checklist: ChecklistConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Self::env_source())
    }

    /// Environment override source
    ///
    /// A double underscore separates nesting levels so that snake_case field
    /// names survive, e.g. `PACKPILOT_WEATHER__ACCESS_KEY` maps to
    /// `weather.access_key`.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("PACKPILOT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_from(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", "http://api.weatherstack.com")?
            .set_default("completion.base_url", "https://api.openai.com/v1")?
            .set_default("completion.model", "gpt-3.5-turbo")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.weather.base_url, "http://api.weatherstack.com");
        assert_eq!(config.completion.base_url, "https://api.openai.com/v1");
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
        assert_eq!(config.checklist.truncation, TruncationPolicy::KeepPartial);
    }

    #[test]
    fn deserialize_from_toml() {
        let toml_str = r#"
            [weather]
            base_url = "http://mock.weather"
            access_key = "wk-123"

            [completion]
            model = "gpt-4"
            max_tokens = 300

            [checklist]
            truncation = "drop_partial"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.weather.base_url, "http://mock.weather");
        assert!(config.weather.access_key.is_some());
        assert_eq!(config.completion.model, "gpt-4");
        assert_eq!(config.completion.max_tokens, 300);
        assert_eq!(config.checklist.truncation, TruncationPolicy::DropPartial);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[weather]\n").unwrap();
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
        assert_eq!(config.checklist.truncation, TruncationPolicy::KeepPartial);
    }

    #[test]
    fn env_overrides_reach_nested_fields() {
        let vars = std::collections::HashMap::from([
            (
                "PACKPILOT_WEATHER__ACCESS_KEY".to_string(),
                "wk-from-env".to_string(),
            ),
            (
                "PACKPILOT_COMPLETION__MODEL".to_string(),
                "gpt-4o-mini".to_string(),
            ),
            (
                "PACKPILOT_COMPLETION__MAX_TOKENS".to_string(),
                "200".to_string(),
            ),
            (
                "PACKPILOT_CHECKLIST__TRUNCATION".to_string(),
                "drop_partial".to_string(),
            ),
        ]);

        let env = AppConfig::env_source().source(Some(vars));
        let config = AppConfig::load_from(env).unwrap();

        assert!(config.weather.access_key.is_some());
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.completion.max_tokens, 200);
        assert_eq!(config.checklist.truncation, TruncationPolicy::DropPartial);
    }

    #[test]
    fn secrets_not_serialized() {
        let mut config = AppConfig::default();
        config.weather.access_key = Some("wk-secret".into());
        config.completion.api_key = Some("sk-secret".into());

        let serialized = toml::to_string(&config).unwrap();
        assert!(!serialized.contains("wk-secret"));
        assert!(!serialized.contains("sk-secret"));
    }
}
