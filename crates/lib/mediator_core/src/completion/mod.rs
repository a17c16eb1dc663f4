//! Completion module — single-turn text completion against a hosted LLM.
//!
//! The mediation processor only sees [`CompletionClient`]; the concrete
//! Cerebras client lives in [`cerebras`] and is configured from
//! [`config::CompletionConfig`].
//!
//! # Public API
//!
//! - [`CompletionClient`] — prompt in, completed text out
//! - [`CompletionRequest`] — model id plus fixed generation parameters
//! - [`cerebras::CerebrasClient`] — OpenAI-compatible chat completions client

pub mod cerebras;
pub mod config;

use async_trait::async_trait;
use thiserror::Error;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3.1-8b";

/// Token budget for a mediation reply.
pub const MAX_TOKENS: u32 = 300;

/// Sampling temperature for a mediation reply.
pub const TEMPERATURE: f32 = 0.7;

/// Errors that can occur while requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider error: {status} {body}")]
    Provider { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// A single-turn, non-streaming completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    /// Sent as the sole user-role message.
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

impl CompletionRequest {
    /// Builds a request with the mediation generation parameters.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        }
    }
}

/// Completion capability — implement for a concrete provider or a test stub.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the full completed text for `request`.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Model identifier to put in outgoing requests.
    fn model(&self) -> &str {
        DEFAULT_MODEL
    }
}
