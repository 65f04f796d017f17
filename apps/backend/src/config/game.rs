/// Final flag awarded when every category is matched in one submission.
pub const DEFAULT_FINAL_FLAG: &str = "FLAG{all_categories_mastered_9876}";

/// Help text shipped with every game payload.
pub const DEFAULT_HELP: &str = "Match each OWASP Top 10 for LLMs category to the correct description. Submit to reveal per-category flags; solve them all to unlock the final flag.";

/// Static, per-process game settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub final_flag: String,
    pub help: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            final_flag: DEFAULT_FINAL_FLAG.to_string(),
            help: DEFAULT_HELP.to_string(),
        }
    }
}
