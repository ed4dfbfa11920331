//! Cooking-assistant chat backend.
//!
//! Browser clients post messages to `/chat`; each turn is stored per session,
//! forwarded with recent history to an OpenAI-compatible chat-completions API
//! and answered with the chef's reply. Replies that contain a recipe are
//! parsed and pushed to the embedding page over `/recipes/events`.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
