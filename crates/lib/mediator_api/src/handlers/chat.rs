//! Chat handler — NVC mediation for recent messages.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};

/// `POST /chat` — evaluate the conversation and relay the mediation outcome.
///
/// Always 200 once the body is accepted; processor failures surface as
/// fallback responses.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(request) = payload?;

    let outcome = state.processor.evaluate(&request.messages).await;
    debug!(
        triggered = outcome.mediation_triggered,
        "mediation evaluated"
    );

    Ok(Json(outcome.into()))
}
