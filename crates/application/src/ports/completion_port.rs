//! Completion port - Interface for single-shot text generation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a completion call
#[derive(Debug, Clone)]
pub struct Completion {
    /// Generated response text
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Whether the provider stopped because the token budget ran out
    pub truncated: bool,
}

/// Port for completion operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Generate a response for a single user prompt
    async fn complete(&self, prompt: &str) -> Result<Completion, ApplicationError>;

    /// Check if the completion backend is reachable
    async fn is_available(&self) -> bool;
}
