use anyhow::Result;
use clap::Parser;
use storyforge::engine::StoryEngine;
use storyforge::models::{AuthoringMode, Config, LengthTier, Provider, StoryRequest};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "storyforge")]
#[command(about = "Generate AI-powered short stories")]
struct CliArgs {
    /// Main character name.
    #[arg(long)]
    character: String,

    /// Setting description.
    #[arg(long)]
    setting: String,

    /// Story genre (e.g. Fantasy, Sci-Fi, Mystery).
    #[arg(long, default_value = "Fantasy")]
    genre: String,

    /// Story theme (e.g. Adventure, Redemption, Survival).
    #[arg(long, default_value = "Adventure")]
    theme: String,

    /// Target length: short, medium, or long.
    #[arg(long, default_value = "medium", value_parser = parse_length)]
    length: LengthTier,

    /// Authoring mode: auto, continue, or analyze.
    #[arg(long, default_value = "auto", value_parser = parse_mode)]
    mode: AuthoringMode,

    /// Provider: openai, anthropic, google, or local. Defaults to the
    /// DEFAULT_PROVIDER environment setting.
    #[arg(long, value_parser = parse_provider)]
    provider: Option<Provider>,

    /// Story beginning to continue from (required for continue/analyze modes).
    #[arg(long)]
    beginning: Option<String>,
}

fn parse_length(input: &str) -> std::result::Result<LengthTier, String> {
    input
        .parse()
        .map_err(|_| format!("Invalid length '{}'. Expected: short, medium, or long", input))
}

fn parse_mode(input: &str) -> std::result::Result<AuthoringMode, String> {
    input.parse().map_err(|_| {
        format!(
            "Invalid mode '{}'. Expected: auto, continue, or analyze",
            input
        )
    })
}

fn parse_provider(input: &str) -> std::result::Result<Provider, String> {
    input.parse().map_err(|_| {
        format!(
            "Invalid provider '{}'. Expected: openai, anthropic, google, or local",
            input
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let provider = args.provider.unwrap_or(config.default_provider);
    info!("Starting storyforge with {} provider", provider);

    let engine = match StoryEngine::from_config(provider, &config) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to initialize engine: {}", e);
            std::process::exit(1);
        }
    };

    let request = StoryRequest {
        mode: args.mode,
        genre: args.genre,
        theme: args.theme,
        character: args.character,
        setting: args.setting,
        length: args.length,
        beginning: args.beginning,
    };

    match engine.generate(&request).await {
        Ok(story) => {
            println!("{}", story);
            Ok(())
        }
        Err(e) => {
            error!("Story generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
