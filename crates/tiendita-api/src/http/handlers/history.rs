//! GET /api/chat-history -- recorded exchanges for a session.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use tiendita_types::session::{CustomerField, Exchange};

use crate::http::error::AppError;
use crate::state::AppState;

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub session_id: Option<String>,
}

/// Response body for the history endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub status: &'static str,
    pub history: Vec<Exchange>,
    pub collected_data: BTreeMap<CustomerField, String>,
}

/// GET /api/chat-history?session_id=... -- stored exchanges, oldest first.
pub async fn chat_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let session_id = query
        .session_id
        .ok_or_else(|| AppError::BadRequest("Se requiere session_id".to_string()))?;

    let history = state.chat_service.history(&session_id).await?;

    Ok(Json(HistoryResponse {
        status: "success",
        history: history.history,
        collected_data: history.collected_data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_history_response_serializes_exchanges() {
        let resp = HistoryResponse {
            status: "success",
            history: vec![Exchange {
                message: "¿tienen stock?".to_string(),
                response: "Sí, tenemos.".to_string(),
                timestamp: Utc::now(),
            }],
            collected_data: BTreeMap::new(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""status":"success""#));
        assert!(json.contains("¿tienen stock?"));
        assert!(json.contains("timestamp"));
    }
}
