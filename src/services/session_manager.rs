// src/services/session_manager.rs
use std::{collections::HashMap, fmt::Debug, sync::Arc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    sessions: HashMap<String, Vec<ChatMessage>>,
}

/// In-memory chat history, keyed by session id.
///
/// Sessions are created on first append and live for the whole process.
/// Message lists are append-only.
#[derive(Clone, Default)]
pub struct SessionManager {
    inner: Arc<RwLock<StoreInner>>,
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}

impl SessionManager {
    // Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a session and return the stored record.
    ///
    /// The id is assigned under the write lock, so ids are strictly
    /// increasing across the whole store.
    pub async fn append(
        &self,
        session_id: &str,
        content: impl Into<String>,
        sender: Sender,
    ) -> ChatMessage {
        let mut guard = self.inner.write().await;
        guard.next_id += 1;
        let msg = ChatMessage {
            id: guard.next_id,
            content: content.into(),
            sender,
            session_id: session_id.to_string(),
            created_at: Utc::now(),
        };
        guard
            .sessions
            .entry(session_id.to_string())
            .or_default()
            .push(msg.clone());
        msg
    }

    /// Get a copy of the session history, oldest first
    pub async fn list(&self, session_id: &str) -> Vec<ChatMessage> {
        let guard = self.inner.read().await;
        guard.sessions.get(session_id).cloned().unwrap_or_default()
    }

    /// Acquire the request lock for one session.
    ///
    /// Holding the guard serializes whole chat turns (user append, upstream
    /// call, reply append) for that session. Other sessions are unaffected.
    pub async fn lock(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of sessions
    pub async fn session_count(&self) -> usize {
        let guard = self.inner.read().await;
        guard.sessions.len()
    }
}
