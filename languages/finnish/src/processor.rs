use std::sync::Arc;

use sana_core::language::{Gradator, HarmonyClassifier, LanguageProcessor};
use sana_core::types::WordAnalysis;
use unicode_normalization::UnicodeNormalization;

use crate::gradation::{FinnishGradator, GradationRules};
use crate::harmony::FinnishHarmony;

/// Finnish language processor
#[derive(Debug, Clone, Default)]
pub struct FinnishProcessor {
    gradator: FinnishGradator,
    harmony: FinnishHarmony,
}

impl FinnishProcessor {
    /// Create a processor with the built-in Wordtype A gradation table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor over a custom gradation table
    pub fn with_rules(rules: Arc<GradationRules>) -> Self {
        tracing::info!("Using custom gradation table with {} rules", rules.len());
        Self {
            gradator: FinnishGradator::new(rules),
            harmony: FinnishHarmony,
        }
    }

    pub fn gradator(&self) -> &FinnishGradator {
        &self.gradator
    }
}

impl LanguageProcessor for FinnishProcessor {
    fn language_code(&self) -> &str {
        "fi"
    }

    /// Trim and compose combining diaeresis (a + U+0308 -> ä)
    fn normalize(&self, text: &str) -> String {
        text.trim().nfc().collect()
    }

    fn analyze(&self, word: &str) -> WordAnalysis {
        let word = self.normalize(word);
        let harmony = self.harmony.classify(&word);

        WordAnalysis {
            gradation: self.gradator.resolve(&word),
            nominative_plural: self.gradator.example_plural(&word),
            harmony,
            endings: self.harmony.example_endings(harmony),
            word,
        }
    }
}

#[cfg(test)]
mod tests {
    use sana_core::error::AnalysisError;
    use sana_core::types::{GradationOutcome, HarmonyGroup};

    use super::*;

    #[test]
    fn analyze_bundles_both_analyses() {
        let analysis = FinnishProcessor::new().analyze("  Hollanti\n");

        assert_eq!(analysis.word, "Hollanti");
        let graded = analysis.gradation.as_ref().unwrap().graded().cloned().unwrap();
        assert_eq!(graded.strong, "nt");
        assert_eq!(analysis.nominative_plural, "Hollannit");
        assert_eq!(analysis.harmony, HarmonyGroup::FrontNeutral);
        assert_eq!(analysis.endings, "-ssa, -vat, -ko");
    }

    #[test]
    fn analyze_normalizes_decomposed_input() {
        let analysis = FinnishProcessor::new().analyze("Jyva\u{0308}skyla\u{0308}a\u{0308}");
        assert_eq!(analysis.word, "Jyväskylää");
        assert_eq!(analysis.harmony, HarmonyGroup::Back);
    }

    #[test]
    fn analyze_keeps_gradation_errors() {
        let analysis = FinnishProcessor::new().analyze("Kone");
        assert!(matches!(
            analysis.gradation,
            Err(AnalysisError::InvalidWordType { .. })
        ));
        assert_eq!(analysis.nominative_plural, "Konet");

        let analysis = FinnishProcessor::new().analyze("Suomi");
        assert_eq!(analysis.gradation, Ok(GradationOutcome::NoGradation));
    }

    #[test]
    fn custom_rules_replace_the_default_table() {
        let rules = GradationRules::new(vec![crate::GradationRule::new("m", "mm")]).unwrap();
        let processor = FinnishProcessor::with_rules(Arc::new(rules));

        let analysis = processor.analyze("Suomi");
        let graded = analysis.gradation.unwrap().graded().cloned().unwrap();
        assert_eq!(graded.transformed, "mmi");
        assert_eq!(analysis.nominative_plural, "Suommit");
        assert_eq!(processor.analyze("Afrikka").gradation, Ok(GradationOutcome::NoGradation));
    }

    #[test]
    fn normalize_composes_umlauts_and_trims() {
        let processor = FinnishProcessor::new();
        assert_eq!(processor.normalize("  Jyva\u{0308}skyla\u{0308}\r\n"), "Jyväskylä");
        assert_eq!(processor.normalize("   "), "");
    }

    #[test]
    fn language_code_is_finnish() {
        assert_eq!(FinnishProcessor::new().language_code(), "fi");
    }
}
