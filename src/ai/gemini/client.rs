use crate::ai::{error_message_from_body, REQUEST_TIMEOUT};
use crate::models::Provider;
use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Lightweight Gemini REST client.
///
/// Gemini authenticates through a `key` query parameter rather than a header.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` may be given as either a bare model ID (`gemini-pro`) or a
    /// `models/...`-prefixed path segment; the prefix is stripped.
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Calls Gemini's `generateContent` endpoint.
    pub async fn generate_content<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                Error::Provider {
                    provider: Provider::Google,
                    message: format!("request failed: {}", e),
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Provider {
            provider: Provider::Google,
            message: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            tracing::error!("Gemini API error (status {}): {}", status, body);
            let message = error_message_from_body(&body).unwrap_or(body);
            return Err(Error::Provider {
                provider: Provider::Google,
                message: format!("API error (status {}): {}", status, message),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::Provider {
                provider: Provider::Google,
                message: format!("unexpected response format: {}", e),
            }
        })
    }
}
