//! Data models and structures
//!
//! Defines the core data structures for story requests, provider selection,
//! and process-wide configuration.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Supported language-model backends, plus the no-network demo fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Local,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Google => "Google",
            Provider::Local => "Local",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "google" => Ok(Provider::Google),
            "local" => Ok(Provider::Local),
            other => Err(Error::UnknownProvider(other.to_string())),
        }
    }
}

/// How the user's opening text (if any) is incorporated into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringMode {
    /// Generate the whole story, opening included.
    Auto,
    /// Continue the user's opening verbatim.
    Continue,
    /// Infer the opening's voice and pacing, then continue in that style.
    Analyze,
}

impl fmt::Display for AuthoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthoringMode::Auto => "auto",
            AuthoringMode::Continue => "continue",
            AuthoringMode::Analyze => "analyze",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AuthoringMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(AuthoringMode::Auto),
            "continue" => Ok(AuthoringMode::Continue),
            "analyze" => Ok(AuthoringMode::Analyze),
            other => Err(Error::InvalidRequest(format!(
                "unknown authoring mode '{}'",
                other
            ))),
        }
    }
}

/// Named length bucket mapping to an advisory target word count.
///
/// The word count is only ever requested inside the prompt text; nothing
/// measures or truncates what the model actually returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthTier {
    Short,
    Medium,
    Long,
}

impl LengthTier {
    pub fn word_count(self) -> u32 {
        match self {
            LengthTier::Short => 500,
            LengthTier::Medium => 1000,
            LengthTier::Long => 1500,
        }
    }
}

impl FromStr for LengthTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(LengthTier::Short),
            "medium" => Ok(LengthTier::Medium),
            "long" => Ok(LengthTier::Long),
            other => Err(Error::InvalidRequest(format!(
                "unknown length tier '{}'",
                other
            ))),
        }
    }
}

/// One story generation request, constructed fresh per call.
#[derive(Debug, Clone)]
pub struct StoryRequest {
    pub mode: AuthoringMode,
    pub genre: String,
    pub theme: String,
    pub character: String,
    pub setting: String,
    pub length: LengthTier,
    /// User-supplied opening text. Required for `continue` and `analyze`.
    pub beginning: Option<String>,
}

// Placeholder keys shipped in sample configs; treated the same as unset.
const OPENAI_KEY_PLACEHOLDER: &str = "your-openai-api-key-here";
const ANTHROPIC_KEY_PLACEHOLDER: &str = "your-anthropic-api-key-here";
const GOOGLE_KEY_PLACEHOLDER: &str = "your-google-api-key-here";

const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-sonnet-20240229";
const DEFAULT_GOOGLE_MODEL: &str = "gemini-pro";

const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Process-wide configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub google_api_key: Option<String>,
    pub google_model: String,
    pub default_provider: Provider,
    pub max_tokens: u32,
    /// Creativity level, clamped to 0.0-1.0.
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let default_provider = match std::env::var("DEFAULT_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => Provider::OpenAi,
        };

        let max_tokens = match std::env::var("MAX_TOKENS") {
            Ok(value) => value
                .parse()
                .map_err(|_| Error::Generic(format!("MAX_TOKENS is not a number: {}", value)))?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };

        let temperature = match std::env::var("TEMPERATURE") {
            Ok(value) => value
                .parse::<f32>()
                .map_err(|_| Error::Generic(format!("TEMPERATURE is not a number: {}", value)))?
                .clamp(0.0, 1.0),
            Err(_) => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            openai_api_key: configured_key(
                std::env::var("OPENAI_API_KEY").ok(),
                OPENAI_KEY_PLACEHOLDER,
            ),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            anthropic_api_key: configured_key(
                std::env::var("ANTHROPIC_API_KEY").ok(),
                ANTHROPIC_KEY_PLACEHOLDER,
            ),
            anthropic_model: std::env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string()),
            google_api_key: configured_key(
                std::env::var("GOOGLE_API_KEY").ok(),
                GOOGLE_KEY_PLACEHOLDER,
            ),
            google_model: std::env::var("GOOGLE_MODEL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_MODEL.to_string()),
            default_provider,
            max_tokens,
            temperature,
        })
    }

    /// A config with no credentials set, using all defaults.
    ///
    /// Every provider routes to demo mode under this config.
    pub fn unconfigured() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            anthropic_api_key: None,
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            google_api_key: None,
            google_model: DEFAULT_GOOGLE_MODEL.to_string(),
            default_provider: Provider::OpenAi,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Usable credential for `provider`, or `None` when unset or still the
    /// sample placeholder. `Local` never has a credential.
    pub fn credential_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai_api_key.as_deref(),
            Provider::Anthropic => self.anthropic_api_key.as_deref(),
            Provider::Google => self.google_api_key.as_deref(),
            Provider::Local => None,
        }
    }
}

fn configured_key(value: Option<String>, placeholder: &str) -> Option<String> {
    value.filter(|key| !key.trim().is_empty() && key != placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!(
            "Anthropic".parse::<Provider>().unwrap(),
            Provider::Anthropic
        );
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!("local".parse::<Provider>().unwrap(), Provider::Local);
    }

    #[test]
    fn test_provider_from_str_unknown() {
        let err = "azure".parse::<Provider>().unwrap_err();
        assert!(matches!(err, Error::UnknownProvider(_)));
        assert!(err.to_string().contains("azure"));
    }

    #[test]
    fn test_length_tier_word_counts() {
        assert_eq!(LengthTier::Short.word_count(), 500);
        assert_eq!(LengthTier::Medium.word_count(), 1000);
        assert_eq!(LengthTier::Long.word_count(), 1500);
    }

    #[test]
    fn test_length_tier_parses_mixed_case() {
        assert_eq!("Short".parse::<LengthTier>().unwrap(), LengthTier::Short);
        assert_eq!("medium".parse::<LengthTier>().unwrap(), LengthTier::Medium);
        assert!("epic".parse::<LengthTier>().is_err());
    }

    #[test]
    fn test_authoring_mode_from_str() {
        assert_eq!(
            "auto".parse::<AuthoringMode>().unwrap(),
            AuthoringMode::Auto
        );
        assert_eq!(
            "continue".parse::<AuthoringMode>().unwrap(),
            AuthoringMode::Continue
        );
        assert_eq!(
            "analyze".parse::<AuthoringMode>().unwrap(),
            AuthoringMode::Analyze
        );
        assert!("remix".parse::<AuthoringMode>().is_err());
    }

    #[test]
    fn test_configured_key_filters_placeholder_and_empty() {
        assert_eq!(
            configured_key(Some("sk-real".to_string()), OPENAI_KEY_PLACEHOLDER),
            Some("sk-real".to_string())
        );
        assert_eq!(
            configured_key(
                Some(OPENAI_KEY_PLACEHOLDER.to_string()),
                OPENAI_KEY_PLACEHOLDER
            ),
            None
        );
        assert_eq!(configured_key(Some("  ".to_string()), OPENAI_KEY_PLACEHOLDER), None);
        assert_eq!(configured_key(None, OPENAI_KEY_PLACEHOLDER), None);
    }

    #[test]
    fn test_credential_for_local_is_always_none() {
        let mut config = Config::unconfigured();
        config.openai_api_key = Some("sk-test".to_string());

        assert_eq!(config.credential_for(Provider::OpenAi), Some("sk-test"));
        assert_eq!(config.credential_for(Provider::Local), None);
        assert_eq!(config.credential_for(Provider::Anthropic), None);
    }
}
