//! Demo-mode story client
//!
//! Used whenever no usable API key is configured. Returns a fixed walkthrough
//! explaining how to configure a real provider, with the prompt echoed back.
//! Performs no network I/O and never fails.

use super::StoryService;
use crate::{prompts, Result};
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct LocalStoryClient;

impl LocalStoryClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoryService for LocalStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<String> {
        Ok(prompts::render(prompts::DEMO_MODE, &[("prompt", prompt)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_response_echoes_prompt() {
        let client = LocalStoryClient::new();
        let story = client
            .generate_story("Write a story about a lighthouse keeper.")
            .await
            .unwrap();

        assert!(story.starts_with("[DEMO MODE"));
        assert!(story.contains("Write a story about a lighthouse keeper."));
    }

    #[tokio::test]
    async fn test_demo_response_lists_vendor_consoles() {
        let client = LocalStoryClient::new();
        let story = client.generate_story("anything").await.unwrap();

        assert!(story.contains("platform.openai.com"));
        assert!(story.contains("console.anthropic.com"));
        assert!(story.contains("aistudio.google.com"));
    }
}
