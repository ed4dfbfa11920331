// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::ChatService;
use crate::services::notifier::RecipeFeed;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chat: ChatService,
    pub recipes: RecipeFeed,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self {
            chat,
            recipes: RecipeFeed::new(),
        }
    }
}
