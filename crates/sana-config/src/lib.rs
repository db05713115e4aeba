use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::quiz::QuizConfig;
use self::ui::UiConfig;

pub mod quiz;
pub mod ui;

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Parse an environment variable, ignoring unset or malformed values
pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub quiz: QuizConfig,

    /// tracing-subscriber filter directive, e.g. "sana=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    /// Build from environment variables, falling back to defaults.
    /// SANA_LOG is resolved by the app on top of `log_filter`.
    pub fn new() -> Self {
        Config {
            ui: UiConfig::new(),
            quiz: QuizConfig::new(),

            log_filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            quiz: QuizConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}
