
use sana_config::Config;
use sana_lang_finnish::FinnishProcessor;

use crate::render::Painter;
use crate::state::AppState;

fn plain_state(config: Config) -> AppState {
    AppState {
        config,
        processor: FinnishProcessor::new(),
        painter: Painter::plain(),
    }
}
