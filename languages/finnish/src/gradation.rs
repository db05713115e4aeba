//! Wordtype A consonant gradation (astevaihtelu).
//!
//! The nominative singular carries the STRONG grade. Endings that close the
//! final syllable (nominative plural "-t", genitive "-n", inessive
//! "-ssa/-ssä", ...) turn the strong consonant or cluster into its WEAK grade.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use sana_core::error::{AnalysisError, RuleError};
use sana_core::language::Gradator;
use sana_core::types::{GradationOutcome, GradationResult};
use serde::Serialize;

use crate::phoneme::{fold, is_vowel};
use crate::syllable::{final_syllable, preceding_syllables};

/// Wordtype A strong -> weak table, two-letter clusters first
const WORDTYPE_A_RULES: [(&str, &str); 11] = [
    ("kk", "k"),
    ("pp", "p"),
    ("tt", "t"),
    ("nk", "ng"),
    ("nt", "nn"),
    ("mp", "mm"),
    ("lt", "ll"),
    ("rt", "rr"),
    ("k", ""),
    ("p", "v"),
    ("t", "d"),
];

static WORDTYPE_A: LazyLock<Arc<GradationRules>> =
    LazyLock::new(|| Arc::new(GradationRules::wordtype_a()));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradationRule {
    pub strong: String,
    pub weak: String,
}

impl GradationRule {
    pub fn new(strong: impl Into<String>, weak: impl Into<String>) -> Self {
        Self {
            strong: strong.into(),
            weak: weak.into(),
        }
    }
}

/// Immutable, ordered strong -> weak table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradationRules {
    rules: Vec<GradationRule>,
}

impl GradationRules {
    /// Validate and build a table. Strong forms are matched lowercase.
    pub fn new(rules: Vec<GradationRule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(rules.len());

        for rule in rules {
            let strong = rule.strong.to_lowercase();
            let weak = rule.weak.to_lowercase();

            if !(1..=2).contains(&strong.chars().count()) {
                return Err(RuleError::InvalidStrongForm(rule.strong));
            }
            if weak.chars().count() > 2 {
                return Err(RuleError::InvalidWeakForm {
                    strong: rule.strong,
                    weak: rule.weak,
                });
            }
            if !seen.insert(strong.clone()) {
                return Err(RuleError::DuplicateStrongForm(strong));
            }

            normalized.push(GradationRule { strong, weak });
        }

        Ok(Self { rules: normalized })
    }

    pub fn wordtype_a() -> Self {
        Self {
            rules: WORDTYPE_A_RULES
                .iter()
                .map(|(strong, weak)| GradationRule::new(*strong, *weak))
                .collect(),
        }
    }

    pub fn get(&self, strong: &str) -> Option<&GradationRule> {
        self.rules.iter().find(|rule| rule.strong == strong)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Longest match first: the last two consonants, then the last one.
    ///
    /// `consonants` must already be lowercase.
    pub fn lookup(&self, consonants: &[char]) -> Option<&GradationRule> {
        let tail = |n: usize| -> Option<String> {
            consonants
                .len()
                .checked_sub(n)
                .map(|start| consonants[start..].iter().collect())
        };

        tail(2)
            .and_then(|key| self.get(&key))
            .or_else(|| tail(1).and_then(|key| self.get(&key)))
    }
}

impl Default for GradationRules {
    fn default() -> Self {
        Self::wordtype_a()
    }
}

/// Gradation resolver over an injected rule table
#[derive(Debug, Clone)]
pub struct FinnishGradator {
    rules: Arc<GradationRules>,
}

impl FinnishGradator {
    pub fn new(rules: Arc<GradationRules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &GradationRules {
        &self.rules
    }
}

impl Default for FinnishGradator {
    fn default() -> Self {
        Self::new(Arc::clone(&WORDTYPE_A))
    }
}

impl Gradator for FinnishGradator {
    fn resolve(&self, word: &str) -> Result<GradationOutcome, AnalysisError> {
        let syllable = final_syllable(word)?;
        let consonants: Vec<char> = syllable
            .chars()
            .filter(|c| !is_vowel(*c))
            .map(fold)
            .collect();

        let Some(rule) = self.rules.lookup(&consonants) else {
            tracing::debug!(
                word,
                syllable,
                "The word either does not undergo consonant gradation or its gradation is not recognized"
            );
            return Ok(GradationOutcome::NoGradation);
        };

        let transformed = replace_first_ignore_case(syllable, &rule.strong, &rule.weak);
        tracing::debug!(
            word,
            strong = %rule.strong,
            weak = %rule.weak,
            %transformed,
            "Resolved gradation"
        );

        Ok(GradationOutcome::Graded(GradationResult {
            strong: rule.strong.clone(),
            weak: rule.weak.clone(),
            transformed,
        }))
    }

    fn example_plural(&self, word: &str) -> String {
        let graded = preceding_syllables(word)
            .ok()
            .zip(self.resolve(word).ok());

        let suffix = if is_all_caps(word) { "T" } else { "t" };

        match graded {
            Some((preceding, GradationOutcome::Graded(result))) => {
                format!("{preceding}{}{suffix}", result.transformed)
            }
            _ => format!("{word}{suffix}"),
        }
    }
}

/// At least one letter and no lowercase ones
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Replace the first occurrence of lowercase `needle`, ignoring case.
/// An all-uppercase match gets an uppercase replacement.
fn replace_first_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let needle: Vec<char> = needle.chars().collect();
    let chars: Vec<(usize, char)> = haystack.char_indices().collect();

    if needle.is_empty() {
        return haystack.to_string();
    }

    let found = chars
        .windows(needle.len())
        .position(|window| window.iter().zip(&needle).all(|((_, c), n)| fold(*c) == *n));

    let Some(i) = found else {
        return haystack.to_string();
    };

    let start = chars[i].0;
    let end = chars
        .get(i + needle.len())
        .map_or(haystack.len(), |(offset, _)| *offset);
    let matched = &haystack[start..end];

    let replacement = if matched.chars().all(char::is_uppercase) {
        replacement.to_uppercase()
    } else {
        replacement.to_string()
    };

    format!("{}{}{}", &haystack[..start], replacement, &haystack[end..])
}

/// Resolve gradation with the built-in Wordtype A table
pub fn resolve_gradation(word: &str) -> Result<GradationOutcome, AnalysisError> {
    FinnishGradator::default().resolve(word)
}

/// Nominative plural example; falls back to `word + "t"` when gradation
/// cannot be resolved for any reason.
pub fn example_nominative_plural(word: &str) -> String {
    FinnishGradator::default().example_plural(word)
}
