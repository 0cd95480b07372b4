use super::client::AnthropicHttpClient;
use super::types::{Message, MessagesRequest, MessagesResponse};
use crate::ai::StoryService;
use crate::models::Provider;
use crate::{Error, Result};
use async_trait::async_trait;

pub struct AnthropicStoryClient {
    http: AnthropicHttpClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicStoryClient {
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            http: AnthropicHttpClient::new(api_key),
            model,
            max_tokens,
            temperature,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl StoryService for AnthropicStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Sending story request to Anthropic (model: {})", self.model);

        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let response: MessagesResponse = self.http.post("/v1/messages", &request).await?;

        response
            .content
            .first()
            .and_then(|block| block.text.as_deref())
            .map(|text| text.trim().to_string())
            .ok_or_else(|| Error::Provider {
                provider: Provider::Anthropic,
                message: "unexpected response format (no text content)".to_string(),
            })
    }
}
