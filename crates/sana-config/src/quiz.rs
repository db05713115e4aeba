use serde::{Deserialize, Serialize};

fn default_rounds() -> u32 {
    1
}

fn default_show_plural() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuizConfig {
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// Compare guesses exactly instead of case-folding them
    #[serde(default)]
    pub case_sensitive: bool,
    /// Print the nominative plural after each answer
    #[serde(default = "default_show_plural")]
    pub show_plural: bool,
}

impl QuizConfig {
    pub fn new() -> Self {
        Self {
            rounds: crate::env_parse("SANA_QUIZ_ROUNDS").unwrap_or_else(default_rounds),
            case_sensitive: crate::env_parse("SANA_QUIZ_CASE_SENSITIVE").unwrap_or_default(),
            show_plural: crate::env_parse("SANA_QUIZ_SHOW_PLURAL")
                .unwrap_or_else(default_show_plural),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            case_sensitive: false,
            show_plural: default_show_plural(),
        }
    }
}
