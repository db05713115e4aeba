pub mod gradation;
pub mod harmony;
pub mod phoneme;
pub mod processor;
pub mod syllable;

pub use gradation::{
    FinnishGradator, GradationRule, GradationRules, example_nominative_plural, resolve_gradation,
};
pub use harmony::{FinnishHarmony, classify_harmony, example_endings};
pub use phoneme::{Phoneme, is_vowel, is_wordtype_a_vowel};
pub use processor::FinnishProcessor;
pub use syllable::{final_syllable, preceding_syllables, vowel_positions};
