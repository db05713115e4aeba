use sana_config::Config;
use sana_lang_finnish::FinnishProcessor;

use crate::render::Painter;

pub struct AppState {
    pub config: Config,
    pub processor: FinnishProcessor,
    pub painter: Painter,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let painter = Painter::for_stdout(config.ui.color);
        Self {
            config,
            processor: FinnishProcessor::new(),
            painter,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
