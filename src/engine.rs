//! Story engine orchestration
//!
//! Wires provider selection, prompt construction, and generation behind a
//! single `generate` operation, with a demo fallback when the selected
//! provider has no usable credential.

use crate::ai::{
    AnthropicStoryClient, GeminiStoryClient, LocalStoryClient, OpenAiStoryClient, StoryService,
};
use crate::models::{AuthoringMode, Config, Provider, StoryRequest};
use crate::story;
use crate::templates::TemplateCatalog;
use crate::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Select the client for `provider`, falling back to demo mode when its
/// credential is unset or still a placeholder. No network I/O happens here.
pub fn client_for(provider: Provider, config: &Config) -> Box<dyn StoryService> {
    if provider != Provider::Local && config.credential_for(provider).is_none() {
        warn!(
            "{} API key not configured, falling back to demo mode",
            provider
        );
        return Box::new(LocalStoryClient::new());
    }

    match provider {
        Provider::OpenAi => {
            info!("Story provider: OpenAI (model: {})", config.openai_model);
            Box::new(OpenAiStoryClient::new(
                config.openai_api_key.clone().unwrap_or_default(),
                config.openai_model.clone(),
                config.max_tokens,
                config.temperature,
            ))
        }
        Provider::Anthropic => {
            info!(
                "Story provider: Anthropic (model: {})",
                config.anthropic_model
            );
            Box::new(AnthropicStoryClient::new(
                config.anthropic_api_key.clone().unwrap_or_default(),
                config.anthropic_model.clone(),
                config.max_tokens,
                config.temperature,
            ))
        }
        Provider::Google => {
            info!("Story provider: Google (model: {})", config.google_model);
            Box::new(GeminiStoryClient::new(
                config.google_api_key.clone().unwrap_or_default(),
                config.google_model.clone(),
                config.max_tokens,
                config.temperature,
            ))
        }
        Provider::Local => {
            info!("Story provider: local demo mode");
            Box::new(LocalStoryClient::new())
        }
    }
}

/// Coordinates prompt construction and provider calls for story requests.
pub struct StoryEngine {
    service: Box<dyn StoryService>,
    catalog: TemplateCatalog,
    stories_generated: AtomicU64,
}

impl StoryEngine {
    /// Build an engine for `provider` using the built-in template catalog.
    pub fn from_config(provider: Provider, config: &Config) -> Result<Self> {
        Ok(Self::with_service(
            client_for(provider, config),
            TemplateCatalog::built_in()?,
        ))
    }

    /// Build an engine from an explicit service, for tests and harnesses
    /// that need to inject mocks.
    pub fn with_service(service: Box<dyn StoryService>, catalog: TemplateCatalog) -> Self {
        Self {
            service,
            catalog,
            stories_generated: AtomicU64::new(0),
        }
    }

    /// Generate one story. Validates the request, composes the prompt, and
    /// returns the provider's text with surrounding whitespace stripped by
    /// the provider client.
    pub async fn generate(&self, request: &StoryRequest) -> Result<String> {
        validate(request)?;

        let prompt = story::build_prompt(request, &self.catalog);
        info!(
            "Generating {} {} story ({} mode, ~{} words)",
            request.genre,
            request.theme,
            request.mode,
            request.length.word_count()
        );

        let story = self.service.generate_story(&prompt).await?;
        self.stories_generated.fetch_add(1, Ordering::Relaxed);
        Ok(story)
    }

    /// Number of stories generated successfully by this engine.
    pub fn stories_generated(&self) -> u64 {
        self.stories_generated.load(Ordering::Relaxed)
    }
}

fn validate(request: &StoryRequest) -> Result<()> {
    if request.character.trim().is_empty() {
        return Err(Error::InvalidRequest(
            "character name must not be empty".to_string(),
        ));
    }
    if request.setting.trim().is_empty() {
        return Err(Error::InvalidRequest(
            "setting description must not be empty".to_string(),
        ));
    }
    if request.mode != AuthoringMode::Auto {
        let has_beginning = request
            .beginning
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty());
        if !has_beginning {
            return Err(Error::InvalidRequest(format!(
                "{} mode requires a story beginning",
                request.mode
            )));
        }
    }
    Ok(())
}
