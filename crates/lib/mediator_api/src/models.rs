//! Request and response bodies for the HTTP API.
//!
//! Field names are part of the wire contract; absent NVC fields serialize
//! as `null`.

use mediator_core::models::chat::{ChatMessage, MediationOutcome};
use serde::{Deserialize, Serialize};

/// `POST /chat` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// `POST /chat` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub mediation_triggered: bool,
    pub observations: Option<String>,
    pub feelings: Option<String>,
    pub needs: Option<String>,
    pub requests: Option<String>,
}

impl From<MediationOutcome> for ChatResponse {
    fn from(outcome: MediationOutcome) -> Self {
        Self {
            response: outcome.response,
            mediation_triggered: outcome.mediation_triggered,
            observations: outcome.observations,
            feelings: outcome.feelings,
            needs: outcome.needs,
            requests: outcome.requests,
        }
    }
}

/// `GET /` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub ai_enabled: bool,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
