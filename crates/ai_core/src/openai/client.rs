//! OpenAI chat-completions client implementation

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::ports::{ChatCompletion, CompletionClient};

/// Chat-completion client for OpenAI-compatible endpoints
#[derive(Debug)]
pub struct OpenAiClient {
    client: Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CompletionError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn bearer_token(&self) -> &str {
        self.config
            .api_key
            .as_ref()
            .map_or("", ExposeSecret::expose_secret)
    }
}

/// OpenAI-format chat request
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatRequestMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage {
    role: String,
    content: String,
}

/// OpenAI-format chat response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<ChatCompletion, CompletionError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatRequestMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(self.bearer_token())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Completion request failed");
            return Err(CompletionError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            CompletionError::InvalidResponse("No choices in response".to_string())
        })?;

        let truncated = choice.finish_reason.as_deref() == Some("length");
        if truncated {
            debug!("Completion stopped at the token budget");
        }

        Ok(ChatCompletion {
            content: choice.message.content,
            model: chat_response
                .model
                .unwrap_or_else(|| self.config.model.clone()),
            truncated,
        })
    }

    #[instrument(skip(self))]
    async fn is_healthy(&self) -> bool {
        let response = self
            .client
            .get(self.api_url("models"))
            .bearer_auth(self.bearer_token())
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        matches!(response, Ok(resp) if resp.status().is_success())
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
