//! Configuration for the completion client

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the chat-completion client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the completion API (default: <https://api.openai.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer credential for the Authorization header
    ///
    /// A missing key is not special-cased: an empty bearer token is sent and
    /// the provider rejects the request.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Output token budget (default: 150)
    ///
    /// Sized to comfortably fit ~15 short packing items; the provider may
    /// still cut the reply off, which is surfaced as a truncation flag.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_max_tokens() -> u32 {
    150
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}
