use serde::{Deserialize, Serialize};
use url::Url;

/// Trivia provider and ingestion configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TriviaConfig {
    /// Base URL of the Open Trivia Database API.
    /// TOML: `trivia.api_base_url`. Default: `https://opentdb.com/`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Url,

    /// Maximum number of questions imported per category in one pass.
    /// Must be a positive integer; zero is rejected at startup.
    /// TOML: `trivia.max_questions_per_category`. Default: `50`.
    #[serde(default = "default_max_questions_per_category")]
    pub max_questions_per_category: u32,

    /// Seconds between full reloads of the question bank. `0` runs a single
    /// pass at startup and stops.
    /// TOML: `trivia.reload_interval_secs`. Default: `86400` (daily).
    #[serde(default = "default_reload_interval_secs")]
    pub reload_interval_secs: u64,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            max_questions_per_category: default_max_questions_per_category(),
            reload_interval_secs: default_reload_interval_secs(),
        }
    }
}

fn default_api_base_url() -> Url {
    Url::parse("https://opentdb.com/").expect("default api base url is valid")
}

fn default_max_questions_per_category() -> u32 {
    50
}

fn default_reload_interval_secs() -> u64 {
    86_400
}
