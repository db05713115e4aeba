use crate::error::AnalysisError;
use crate::types::{GradationOutcome, HarmonyGroup, WordAnalysis};

/// Word analysis interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "fi", "et", ...)
    fn language_code(&self) -> &str;

    /// Normalize input (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Run every available analysis on a single word
    fn analyze(&self, word: &str) -> WordAnalysis;
}

/// Optional trait for languages with consonant gradation
pub trait Gradator: Send + Sync {
    /// Strong-to-weak gradation of the final syllable
    fn resolve(&self, word: &str) -> Result<GradationOutcome, AnalysisError>;

    /// Example form built from the weak grade; must never fail
    fn example_plural(&self, word: &str) -> String;
}

/// Optional trait for languages with vowel harmony
pub trait HarmonyClassifier: Send + Sync {
    fn classify(&self, word: &str) -> HarmonyGroup;

    /// Example suffixes agreeing with `group`
    fn example_endings(&self, group: HarmonyGroup) -> &'static str;
}
