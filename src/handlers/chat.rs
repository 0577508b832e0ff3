//! Chat relay handler
//!
//! Validates the UI's chat request, forwards the question to the backend as
//! a query parameter, and reshapes the answer into the chat contract.

use crate::handlers::AppState;
use crate::models::ApiResponse;
use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::create_question_log_summary;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle chat requests
///
/// POST /api/chat
///
/// Per-request flow: validate the body, forward to the backend, validate its
/// answer. Any failure is rendered by `AppError` as the fixed failure shape
/// with a server-error status; there is no retry.
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    body: Option<Json<serde_json::Value>>,
) -> Result<Json<ApiResponse>, AppError> {
    let question = match body.as_ref() {
        Some(Json(value)) => extract_user_input(value)?.to_string(),
        None => {
            warn!("Chat request carried no JSON body");
            return Err(AppError::Validation("user_input must be a string".to_string()));
        }
    };

    if let Ok(summary) = serde_json::to_string(&create_question_log_summary(&question)) {
        debug!("📥 Chat request: {}", summary);
    }

    let answer = state.backend.query(&question).await?;

    debug!("Chat request completed, source: {:?}", answer.source);
    Ok(Json(answer))
}

/// Pull the question out of the request body
///
/// A missing field or a non-string value is a validation failure handled
/// here, never forwarded to the backend.
fn extract_user_input(body: &serde_json::Value) -> AppResult<&str> {
    body.get("user_input")
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            warn!("Chat request validation failed: user_input missing or not a string");
            AppError::Validation("user_input must be a string".to_string())
        })
}
