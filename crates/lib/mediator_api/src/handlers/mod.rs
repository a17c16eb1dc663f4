//! Request handlers.

pub mod chat;
pub mod root;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
