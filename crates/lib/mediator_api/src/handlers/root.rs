//! Root endpoint — service banner and AI availability.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::RootResponse;

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Mediator Bot API";

/// `GET /` — reports whether AI mediation was configured at startup.
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME.to_string(),
        ai_enabled: state.processor.is_enabled(),
    })
}
