// src/services/mod.rs
pub mod chatbot;
pub mod llm_client;
pub mod notifier;
pub mod persona;
pub mod recipe_extractor;
pub mod session_manager;
