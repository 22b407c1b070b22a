//! POST /api/chat -- one dialogue turn.
//!
//! The handler validates the envelope, delegates to the chat service, and
//! maps the reply onto the wire format: `waiting_for` while the scripted
//! collection runs, `collected_data` once the model answers. A field value
//! that fails validation comes back as HTTP 200 with `status: "error"` and
//! an unchanged `waiting_for`.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use tiendita_types::session::CustomerField;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: &'static str,
    pub session_id: String,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_for: Option<CustomerField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected_data: Option<BTreeMap<CustomerField, String>>,
}

/// POST /api/chat -- advance the dialogue by one turn.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload
        .map_err(|_| AppError::BadRequest("El contenido debe ser JSON".to_string()))?;

    let message = request
        .message
        .ok_or_else(|| AppError::BadRequest("El campo \"message\" es requerido".to_string()))?;

    let reply = state
        .chat_service
        .handle_message(request.session_id.as_deref(), &message)
        .await?;

    Ok(Json(ChatResponse {
        status: if reply.rejected { "error" } else { "success" },
        session_id: reply.session_id,
        response: reply.response,
        waiting_for: reply.waiting_for,
        collected_data: reply.collected_data,
    }))
}
