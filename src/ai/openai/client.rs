use crate::ai::{error_message_from_body, REQUEST_TIMEOUT};
use crate::models::Provider;
use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAiHttpClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenAI: {}", e);
                Error::Provider {
                    provider: Provider::OpenAi,
                    message: format!("request failed: {}", e),
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Provider {
            provider: Provider::OpenAi,
            message: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            tracing::error!("OpenAI API error (status {}): {}", status, body);
            let message = error_message_from_body(&body).unwrap_or(body);
            return Err(Error::Provider {
                provider: Provider::OpenAi,
                message: format!("API error (status {}): {}", status, message),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}\nBody: {}", e, body);
            Error::Provider {
                provider: Provider::OpenAi,
                message: format!("unexpected response format: {}", e),
            }
        })
    }
}
