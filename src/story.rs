//! Prompt construction for story generation
//!
//! One pure builder per authoring mode. Each produces a single
//! natural-language instruction string from the request and the template
//! catalog; nothing here performs I/O or validates inputs.

use crate::models::{AuthoringMode, StoryRequest};
use crate::prompts;
use crate::templates::TemplateCatalog;

/// Compose the prompt for `request`, dispatching on its authoring mode.
pub fn build_prompt(request: &StoryRequest, catalog: &TemplateCatalog) -> String {
    match request.mode {
        AuthoringMode::Auto => auto_prompt(request, catalog),
        AuthoringMode::Continue => continuation_prompt(request),
        AuthoringMode::Analyze => analysis_prompt(request),
    }
}

/// Instruction for a complete original story, citing genre and theme phrases
/// from the catalog.
pub fn auto_prompt(request: &StoryRequest, catalog: &TemplateCatalog) -> String {
    let genre = catalog.genre(&request.genre);
    let theme = catalog.theme(&request.theme);

    prompts::render(
        prompts::AUTO,
        &[
            ("word_count", &request.length.word_count().to_string()),
            ("genre", &request.genre),
            ("theme", &request.theme),
            ("character", &request.character),
            ("setting", &request.setting),
            ("genre_elements", &genre.elements.join(", ")),
            ("theme_elements", &theme.elements.join(", ")),
        ],
    )
}

/// Instruction embedding the user's opening verbatim, followed by a directive
/// to continue it while preserving tone.
pub fn continuation_prompt(request: &StoryRequest) -> String {
    prompts::render(
        prompts::CONTINUE,
        &[
            ("beginning", request.beginning.as_deref().unwrap_or_default()),
            ("genre", &request.genre),
            ("theme", &request.theme),
            ("character", &request.character),
            ("setting", &request.setting),
            ("word_count", &request.length.word_count().to_string()),
        ],
    )
}

/// As [`continuation_prompt`], but the model is first told to infer and then
/// imitate the opening's voice and pacing. The target word count includes the
/// opening's own length.
pub fn analysis_prompt(request: &StoryRequest) -> String {
    prompts::render(
        prompts::ANALYZE,
        &[
            ("beginning", request.beginning.as_deref().unwrap_or_default()),
            ("genre", &request.genre),
            ("theme", &request.theme),
            ("character", &request.character),
            ("setting", &request.setting),
            ("word_count", &request.length.word_count().to_string()),
        ],
    )
}
