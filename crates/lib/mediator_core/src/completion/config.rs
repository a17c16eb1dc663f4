//! Completion configuration resolution.
//!
//! Resolves the Cerebras credential and endpoint settings from environment
//! variables. A missing or empty `CEREBRAS_API_KEY` disables the capability.

use std::env;
use std::time::Duration;

use super::DEFAULT_MODEL;

/// Default Cerebras API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai/v1";

/// Resolved configuration for the completion provider.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Cerebras API key. `None` disables AI mediation.
    pub api_key: Option<String>,
    /// API base URL, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Whole-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl CompletionConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable                | Default                      |
    /// |-------------------------|------------------------------|
    /// | `CEREBRAS_API_KEY`      | unset (AI disabled)          |
    /// | `CEREBRAS_BASE_URL`     | `https://api.cerebras.ai/v1` |
    /// | `CEREBRAS_MODEL`        | `llama3.1-8b`                |
    /// | `CEREBRAS_TIMEOUT_SECS` | unset (no explicit timeout)  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("CEREBRAS_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout = lookup("CEREBRAS_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_key,
            base_url: lookup("CEREBRAS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("CEREBRAS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout,
        }
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
