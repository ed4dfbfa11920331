use std::sync::Arc;

use thiserror::Error;

use super::{
    llm_client::{CompletionRequest, LlmClient, LlmError, PromptMessage, Role},
    persona,
    session_manager::{ChatMessage, Sender, SessionManager},
};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error("upstream call failed: {0}")]
    Upstream(#[from] LlmError),
}

/// Sampling and prompt-size settings for each upstream call
#[derive(Clone, Debug)]
pub struct ChatSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub history_window: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            history_window: 14,
        }
    }
}

/// Drives one chat turn: store, prompt, call upstream, store the reply.
#[derive(Clone)]
pub struct ChatService {
    sessions: SessionManager,
    llm: Option<Arc<dyn LlmClient>>,
    settings: ChatSettings,
}

impl ChatService {
    /// `llm` is `None` when no credential is configured; every turn then
    /// answers with the onboarding message.
    pub fn new(
        sessions: SessionManager,
        llm: Option<Arc<dyn LlmClient>>,
        settings: ChatSettings,
    ) -> Self {
        Self {
            sessions,
            llm,
            settings,
        }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub async fn handle_user_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<String, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::Validation(persona::EMPTY_MESSAGE.to_string()));
        }

        let _turn = self.sessions.lock(session_id).await;
        self.sessions.append(session_id, text, Sender::User).await;

        let Some(llm) = &self.llm else {
            tracing::warn!(session_id, "no API key configured, sending onboarding reply");
            self.sessions
                .append(session_id, persona::ONBOARDING_REPLY, Sender::Assistant)
                .await;
            return Ok(persona::ONBOARDING_REPLY.to_string());
        };

        // The new message is the last entry; the turn lock guarantees it.
        let mut history = self.sessions.list(session_id).await;
        history.pop();
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: build_prompt(&history, text, self.settings.history_window),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let reply = match llm.complete(&request).await {
            Ok(choices) => choices
                .into_iter()
                .next()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| persona::EMPTY_REPLY.to_string()),
            Err(LlmError::QuotaExceeded(detail)) => {
                tracing::error!(session_id, error = %detail, "provider quota exhausted");
                persona::QUOTA_REPLY.to_string()
            }
            Err(e) => {
                tracing::error!(session_id, error = %e, "chat completion failed");
                return Err(e.into());
            }
        };

        self.sessions
            .append(session_id, reply.as_str(), Sender::Assistant)
            .await;
        Ok(reply)
    }
}

/// System persona, the last `window` history messages, then the new message.
pub fn build_prompt(history: &[ChatMessage], new_message: &str, window: usize) -> Vec<PromptMessage> {
    let recent = &history[history.len().saturating_sub(window)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(PromptMessage::new(Role::System, persona::SYSTEM_PROMPT));
    messages.extend(recent.iter().map(|m| {
        let role = match m.sender {
            Sender::User => Role::User,
            Sender::Assistant => Role::Assistant,
        };
        PromptMessage::new(role, m.content.as_str())
    }));
    messages.push(PromptMessage::new(Role::User, new_message));
    messages
}
