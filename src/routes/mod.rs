// src/routes/mod.rs
pub mod chat;
pub mod events;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, health_handler, history_handler};
use events::recipe_events_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/history/{session_id}", get(history_handler))
        .route("/recipes/events", get(recipe_events_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}
