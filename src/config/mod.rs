mod basic;
mod trivia;

pub use basic::BasicConfig;
pub use trivia::TriviaConfig;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Trivia provider and ingestion settings (see `trivia` table in
    /// config.toml).
    #[serde(default)]
    pub trivia: TriviaConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults and a config TOML file.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        }
    }

    /// Loads configuration by merging defaults and `config.toml` if present,
    /// then validates it. Invalid configuration is a startup failure, not a
    /// runtime one.
    pub fn load() -> Self {
        let cfg: Self = Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional config.toml): {err}")
        });
        cfg.validate();
        cfg
    }

    fn validate(&self) {
        if self.trivia.max_questions_per_category == 0 {
            panic!("trivia.max_questions_per_category must be a positive integer");
        }
    }
}
