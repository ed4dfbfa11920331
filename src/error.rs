// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::{chatbot::ChatError, llm_client::LlmError, persona};

/// Errors returned by HTTP handlers.
///
/// Upstream detail is logged where it happens; clients only get a short
/// user-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("upstream error: {0}")]
    Upstream(#[from] LlmError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(m) => AppError::BadRequest(m),
            ChatError::Upstream(e) => AppError::Upstream(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(status = %rejection.status(), error = %rejection.body_text(), "rejected chat request body");
        AppError::BadRequest(persona::INVALID_REQUEST.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                persona::UPSTREAM_ERROR.to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
