use super::StoryService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scriptable in-memory story client for tests.
///
/// Queued responses are returned in order and cycled; queued failures are
/// consumed before any responses.
pub struct MockStoryClient {
    responses: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockStoryClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_story_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, message: String) -> Self {
        self.failures.lock().unwrap().push(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockStoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoryService for MockStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            return Err(Error::Generic(failures.remove(0)));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response echoes the prompt for assertions.
            Ok(format!("Mock story generated from prompt: {}", prompt))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_response_echoes_prompt() {
        let client = MockStoryClient::new();
        let story = client.generate_story("a knight and a dragon").await.unwrap();
        assert!(story.contains("a knight and a dragon"));
    }

    #[tokio::test]
    async fn test_mock_custom_responses_cycle() {
        let client = MockStoryClient::new()
            .with_story_response("First story".to_string())
            .with_story_response("Second story".to_string());

        assert_eq!(client.generate_story("x").await.unwrap(), "First story");
        assert_eq!(client.generate_story("x").await.unwrap(), "Second story");
        assert_eq!(client.generate_story("x").await.unwrap(), "First story");
    }

    #[tokio::test]
    async fn test_mock_failures_consumed_before_responses() {
        let client = MockStoryClient::new()
            .with_failure("transient outage".to_string())
            .with_story_response("recovered".to_string());

        let err = client.generate_story("x").await.unwrap_err();
        assert!(err.to_string().contains("transient outage"));

        assert_eq!(client.generate_story("x").await.unwrap(), "recovered");
        assert_eq!(client.get_call_count(), 2);
    }
}
