use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::ai::StoryService;
use crate::models::Provider;
use crate::{Error, Result};
use async_trait::async_trait;

// Fixed sampling parameters for story generation.
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;

pub struct GeminiStoryClient {
    http: GeminiHttpClient,
    max_tokens: u32,
    temperature: f32,
}

impl GeminiStoryClient {
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            http: GeminiHttpClient::new(api_key, model),
            max_tokens,
            temperature,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<&str> {
        response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .and_then(|part| part.text.as_deref())
    }
}

#[async_trait]
impl StoryService for GeminiStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Sending story request to Gemini");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        Self::extract_text(&response)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| Error::Provider {
                provider: Provider::Google,
                message: "unexpected response format (no candidate text)".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-pro";

    fn make_client(server: &MockServer, api_key: &str, model: &str) -> GeminiStoryClient {
        GeminiStoryClient::new(api_key.to_string(), model.to_string(), 2000, 0.8)
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_story_sends_key_as_query_param() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "  A comet wrote letters in the sky.  " }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let story = make_client(&server, "test-key", DEFAULT_MODEL)
            .generate_story("Write a story")
            .await
            .unwrap();

        assert_eq!(story, "A comet wrote letters in the sky.");
    }

    #[tokio::test]
    async fn test_generate_story_sends_sampling_config() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(body_string_contains("\"topP\":0.95"))
            .and(body_string_contains("\"topK\":40"))
            .and(body_string_contains("\"maxOutputTokens\":2000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "story" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        make_client(&server, "key", DEFAULT_MODEL)
            .generate_story("Write a story")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_strips_models_prefix_from_model_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "story" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        make_client(&server, "key", "models/gemini-pro")
            .generate_story("prompt")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_api_error_prefers_vendor_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
            })))
            .mount(&server)
            .await;

        let err = make_client(&server, "bad-key", DEFAULT_MODEL)
            .generate_story("prompt")
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("Google"));
        assert!(text.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let err = make_client(&server, "key", DEFAULT_MODEL)
            .generate_story("prompt")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Provider {
                provider: Provider::Google,
                ..
            }
        ));
        assert!(err.to_string().contains("unexpected response format"));
    }
}
