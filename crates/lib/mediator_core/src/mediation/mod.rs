//! Mediation module — decides whether a conversation needs NVC mediation.
//!
//! [`MediationProcessor::evaluate`] never fails: a missing completion
//! client, a failed call, and unparseable replies all map to a fallback
//! [`MediationOutcome`].

pub mod classify;
pub mod prompt;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::models::chat::{ChatMessage, MediationOutcome};

/// Evaluates recent chat messages for mediation.
///
/// Holds no per-request state; clones share the same completion client.
#[derive(Clone)]
pub struct MediationProcessor {
    client: Option<Arc<dyn CompletionClient>>,
}

impl MediationProcessor {
    /// Creates a processor. `None` disables AI mediation.
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Returns true if a completion client is configured.
    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Evaluates `messages` and returns the mediation outcome.
    pub async fn evaluate(&self, messages: &[ChatMessage]) -> MediationOutcome {
        let Some(client) = &self.client else {
            return MediationOutcome::listening();
        };

        let request = CompletionRequest::new(client.model(), prompt::build_prompt(messages));
        debug!(
            message_count = messages.len(),
            context = prompt::recent(messages).len(),
            model = %request.model,
            "evaluating conversation"
        );

        match client.complete(&request).await {
            Ok(reply) => classify::classify(&reply),
            Err(e) => {
                warn!(error = %e, "completion failed, using fallback response");
                MediationOutcome::step_back()
            }
        }
    }
}

impl std::fmt::Debug for MediationProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediationProcessor")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
