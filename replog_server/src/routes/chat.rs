//! The conversational front door and its in-memory record dump.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use chrono::Utc;
use replog_core::{ChatInteraction, InteractionLog};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat/", post(chat))
        .route("/interactions-memory/", get(interactions_memory))
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

/// Always answers HTTP 200; handler failures are folded into the reply
/// text with a usage hint so the chat client never sees a hard error.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(message): Json<ChatMessage>,
) -> Json<ChatResponse> {
    let response = match state.handler.handle(&message.message) {
        Ok(reply) => reply.text,
        Err(err) => {
            error!("chat handler failed: {err}");
            format!(
                "I encountered an error: {err}\n\n\
                 Please try: 'Log meeting with Dr. Smith about Product X'"
            )
        }
    };

    Json(ChatResponse {
        response,
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct MemoryDump {
    pub count: usize,
    pub interactions: Vec<ChatInteraction>,
}

async fn interactions_memory(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MemoryDump>, ApiError> {
    let interactions = state.handler.log().list()?;
    Ok(Json(MemoryDump {
        count: interactions.len(),
        interactions,
    }))
}
