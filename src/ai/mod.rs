//! AI provider integration for story generation
//!
//! Provides one client per hosted language-model backend plus a no-network
//! demo fallback, all behind the [`StoryService`] trait.

pub mod anthropic;
pub mod gemini;
pub mod local;
pub mod mock;
pub mod openai;

pub use anthropic::AnthropicStoryClient;
pub use gemini::GeminiStoryClient;
pub use local::LocalStoryClient;
pub use mock::MockStoryClient;
pub use openai::OpenAiStoryClient;

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Wall-clock bound on every provider request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[async_trait]
pub trait StoryService: Send + Sync {
    async fn generate_story(&self, prompt: &str) -> Result<String>;
}

/// Pull the human-readable message out of a vendor error body.
///
/// All three vendors wrap errors as `{"error": {"message": ...}}`.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body_extracts_message() {
        let body = r#"{"error": {"message": "quota exceeded", "type": "rate_limit"}}"#;
        assert_eq!(
            error_message_from_body(body),
            Some("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_error_message_from_body_rejects_other_shapes() {
        assert_eq!(error_message_from_body("not json"), None);
        assert_eq!(error_message_from_body(r#"{"message": "flat"}"#), None);
        assert_eq!(error_message_from_body(r#"{"error": "plain string"}"#), None);
    }
}
