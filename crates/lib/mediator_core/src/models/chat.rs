//! Chat domain models.
//!
//! These are internal domain models, distinct from the API request/response
//! shapes in `mediator_api` (which fix the wire field names).

use serde::{Deserialize, Serialize};

/// Reply used when there is nothing to mediate.
pub const LISTENING_RESPONSE: &str = "I'm listening. Continue your conversation.";

/// Reply used when the completion service could not be reached.
pub const STEP_BACK_RESPONSE: &str =
    "Let's take a step back and try to understand each other's perspectives.";

/// Reply used when a structured mediation omits its `response` key.
pub const DEFAULT_MEDIATION_RESPONSE: &str = "Let me help mediate this conversation.";

/// A single chat message as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Free-form speaker identifier (user name, id, ...).
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Result of evaluating a conversation for mediation.
///
/// The four NVC fields are only ever `Some` when `mediation_triggered` is
/// true and the upstream reply parsed as structured data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediationOutcome {
    pub response: String,
    pub mediation_triggered: bool,
    pub observations: Option<String>,
    pub feelings: Option<String>,
    pub needs: Option<String>,
    pub requests: Option<String>,
}

impl MediationOutcome {
    /// No mediation: the conversation is fine or no model is configured.
    pub fn listening() -> Self {
        Self::untriggered(LISTENING_RESPONSE)
    }

    /// Fallback for a failed completion call.
    pub fn step_back() -> Self {
        Self::untriggered(STEP_BACK_RESPONSE)
    }

    /// Triggered mediation carrying the model's unstructured text.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            response: text.into(),
            mediation_triggered: true,
            ..Self::default()
        }
    }

    /// Returns true if any of the four NVC fields is present.
    pub fn has_nvc_fields(&self) -> bool {
        self.observations.is_some()
            || self.feelings.is_some()
            || self.needs.is_some()
            || self.requests.is_some()
    }

    fn untriggered(response: &str) -> Self {
        Self {
            response: response.to_string(),
            mediation_triggered: false,
            ..Self::default()
        }
    }
}
