//! Port definitions for the completion client
//!
//! Defines the trait that completion adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// A completed single-shot chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Text of the first choice
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Whether the provider stopped because the token budget ran out
    pub truncated: bool,
}

/// Port for chat-completion implementations
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single user message and return the first choice's text
    async fn complete(&self, prompt: &str) -> Result<ChatCompletion, CompletionError>;

    /// Check if the completion endpoint is reachable
    async fn is_healthy(&self) -> bool;

    /// Model requested by this client
    fn model(&self) -> &str;
}
