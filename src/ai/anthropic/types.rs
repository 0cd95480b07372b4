//! Anthropic Messages API request/response payloads.

use serde::{Deserialize, Serialize};

/// Request body for the Messages endpoint.
#[derive(Debug, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

/// Single conversation turn.
#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Top-level Messages response.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One response content block; only text blocks carry story output.
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    pub text: Option<String>,
}
