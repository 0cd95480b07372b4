pub mod client;
pub mod story;
pub mod types;

pub use story::OpenAiStoryClient;
