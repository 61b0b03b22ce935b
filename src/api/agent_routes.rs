//! Assistant chat passthrough.
//!
//! The assistant is an external collaborator: when an upstream URL is
//! configured the message is proxied verbatim, otherwise a canned reply keeps
//! the panel usable in local setups.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /agent/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let Some(upstream) = &state.agent_upstream else {
        return Ok(Json(ChatResponse {
            response: format!(
                "No assistant is configured. You said: {}",
                request.message
            ),
        }));
    };

    let result = state
        .http
        .post(format!("{}/agent/chat", upstream.trim_end_matches('/')))
        .json(&request)
        .send()
        .await;

    match result {
        Ok(response) if response.status().is_success() => response
            .json::<ChatResponse>()
            .await
            .map(Json)
            .map_err(|e| {
                warn!(%e, "assistant returned malformed response");
                (StatusCode::BAD_GATEWAY, "malformed assistant response".to_string())
            }),
        Ok(response) => Err((
            StatusCode::BAD_GATEWAY,
            format!("assistant returned HTTP {}", response.status()),
        )),
        Err(e) => {
            warn!(%e, "assistant unreachable");
            Err((StatusCode::BAD_GATEWAY, "assistant unreachable".to_string()))
        }
    }
}
