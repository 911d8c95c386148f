//! Chat-completion client for PackPilot
//!
//! Single-shot completion against an OpenAI-compatible chat endpoint. The
//! packing workflow sends one user message per request and reads back the
//! first choice's text.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::CompletionConfig;
pub use error::CompletionError;
pub use openai::OpenAiClient;
pub use ports::{ChatCompletion, CompletionClient};
