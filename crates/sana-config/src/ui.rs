use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

fn default_rule_width() -> usize {
    89
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Bold/blue highlights; ignored when stdout is not a terminal
    #[serde(default = "default_color")]
    pub color: bool,
    /// Width of the horizontal rule around quiz rounds
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let color = crate::env_parse("SANA_COLOR").unwrap_or_else(default_color);
        let rule_width = crate::env_parse("SANA_RULE_WIDTH").unwrap_or_else(default_rule_width);

        Self { color, rule_width }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            rule_width: default_rule_width(),
        }
    }
}
