use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HistoryResponse},
    services::notifier::detect_and_notify,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let session_id = match payload.session_id {
        Some(s) if !s.trim().is_empty() => s,
        _ => Uuid::new_v4().to_string(),
    };

    let reply = state
        .chat
        .handle_user_message(&session_id, &payload.message)
        .await?;

    detect_and_notify(&reply, &state.recipes);

    Ok(Json(ChatResponse { session_id, reply }))
}

pub async fn history_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Json<HistoryResponse> {
    let messages = state.chat.sessions().list(&session_id).await;
    Json(HistoryResponse {
        messages: messages.into_iter().map(Into::into).collect(),
    })
}

pub async fn health_handler(State(state): State<SharedState>) -> String {
    let sessions = state.chat.sessions().session_count().await;
    format!("OK ({sessions} sessions)")
}
