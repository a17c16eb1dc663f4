//! # mediator_api
//!
//! HTTP API library for Mediator Bot.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use mediator_core::mediation::MediationProcessor;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{chat, root};

/// Route paths served by [`router`].
pub mod routes {
    pub const GET_ROOT: &str = "/";
    pub const POST_CHAT: &str = "/chat";
}

/// Shared application state passed to all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Mediation processor; disabled when no API key is configured.
    pub processor: MediationProcessor,
}

impl AppState {
    pub fn new(processor: MediationProcessor) -> Self {
        Self { processor }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_ROOT, get(root::root_handler))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
