use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for POST /chat/completions
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// One entry of the conversation sent to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body from POST /chat/completions
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// 429 rate limit body, when the API bothers to send one
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResponse {
    pub retry_after: Option<i64>,
}

/// Comprehensive error type for completion API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rate limited, retry after {retry_after} ms")]
    RateLimited { retry_after: i64 },
    #[error("server error ({0}): {1}")]
    ServerError(u16, String),
    #[error("http error ({0}): {1}")]
    HttpError(u16, String),
    #[error("request error: {0}")]
    RequestError(String),
    #[error("deserialization error: {0}")]
    DeserializationError(String),
    #[error("completion response contained no choices")]
    EmptyCompletion,
}
