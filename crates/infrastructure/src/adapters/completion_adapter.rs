//! Completion adapter - Implements CompletionPort using ai_core

use ai_core::{CompletionClient, CompletionConfig, CompletionError, OpenAiClient};
use application::error::ApplicationError;
use application::ports::{Completion, CompletionPort};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for text generation using an OpenAI-compatible endpoint
pub struct CompletionAdapter {
    client: OpenAiClient,
}

impl std::fmt::Debug for CompletionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionAdapter")
            .field("client", &"OpenAiClient")
            .finish()
    }
}

impl CompletionAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: CompletionConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenAiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map completion error to application error
    fn map_error(err: CompletionError) -> ApplicationError {
        match err {
            CompletionError::ConnectionFailed(e)
            | CompletionError::RequestFailed(e)
            | CompletionError::ServerError(e) => ApplicationError::Completion(e),
            CompletionError::Timeout => {
                ApplicationError::Completion("Request timed out".to_string())
            },
            CompletionError::InvalidResponse(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl CompletionPort for CompletionAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<Completion, ApplicationError> {
        let result = self.client.complete(prompt).await.map_err(Self::map_error);

        match &result {
            Ok(completion) => {
                debug!(
                    model = %completion.model,
                    truncated = completion.truncated,
                    "Received completion"
                );
            },
            Err(e) => {
                debug!(error = %e, "Completion request failed");
            },
        }

        result.map(|c| Completion {
            content: c.content,
            model: c.model,
            truncated: c.truncated,
        })
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
