// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::session_manager::{ChatMessage, Sender};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub session_id: Option<String>,
    // Missing field is reported as an empty-message 400, not a 422
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
}

#[derive(Deserialize, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageView>,
}

#[derive(Deserialize, Serialize)]
pub struct MessageView {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    /// RFC 3339
    pub timestamp: String,
}

impl From<ChatMessage> for MessageView {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id,
            content: m.content,
            sender: m.sender,
            timestamp: m.created_at.to_rfc3339(),
        }
    }
}
