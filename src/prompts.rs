pub const SYSTEM_PERSONA: &str = include_str!("../data/prompts/system_persona.txt");
pub const AUTO: &str = include_str!("../data/prompts/auto.txt");
pub const CONTINUE: &str = include_str!("../data/prompts/continue.txt");
pub const ANALYZE: &str = include_str!("../data/prompts/analyze.txt");
pub const DEMO_MODE: &str = include_str!("../data/prompts/demo_mode.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
