use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::ai::StoryService;
use crate::models::Provider;
use crate::{prompts, Error, Result};
use async_trait::async_trait;

pub struct OpenAiStoryClient {
    http: OpenAiHttpClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiStoryClient {
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            http: OpenAiHttpClient::new(api_key),
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
impl StoryService for OpenAiStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Sending story request to OpenAI (model: {})", self.model);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(prompts::SYSTEM_PERSONA.trim().to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(prompt.to_string()),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response: ChatCompletionResponse =
            self.http.post("/v1/chat/completions", &request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(|text| text.trim().to_string())
            .ok_or_else(|| Error::Provider {
                provider: Provider::OpenAi,
                message: "unexpected response format (no message content)".to_string(),
            })
    }
}
