//! API server configuration.

use mediator_core::completion::config::CompletionConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8000").
    pub bind_addr: String,
    /// Completion provider settings.
    pub completion: CompletionConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable             | Default        |
    /// |----------------------|----------------|
    /// | `MEDIATOR_BIND_ADDR` | `0.0.0.0:8000` |
    /// | `CEREBRAS_*`         | see [`CompletionConfig::from_env`] |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("MEDIATOR_BIND_ADDR")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            completion: CompletionConfig::from_lookup(&lookup),
        }
    }
}
