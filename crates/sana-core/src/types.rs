use std::fmt;

use serde::Serialize;

use crate::error::AnalysisError;

/// A vowel occurrence; `index` is the byte offset into the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct VowelPosition {
    pub index: usize,
    pub vowel: char,
}

/// Strong form, its weak replacement and the rewritten final syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradationResult {
    pub strong: String,
    /// Empty when the strong consonant is deleted (k -> ∅)
    pub weak: String,
    pub transformed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GradationOutcome {
    Graded(GradationResult),
    /// Well-formed word whose final consonants match no rule
    NoGradation,
}

impl GradationOutcome {
    pub fn graded(&self) -> Option<&GradationResult> {
        match self {
            GradationOutcome::Graded(result) => Some(result),
            GradationOutcome::NoGradation => None,
        }
    }
}

/// Vowel harmony group, derived from the set of distinct vowels in a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyGroup {
    Front,
    Back,
    Neutral,
    FrontNeutral,
    BackNeutral,
    /// No vowels at all
    Inconclusive,
    /// Vowels from both the a/o/u and ä/ö/y camps (compounds, loanwords)
    Contradictory,
}

impl HarmonyGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyGroup::Front => "front",
            HarmonyGroup::Back => "back",
            HarmonyGroup::Neutral => "neutral",
            HarmonyGroup::FrontNeutral => "front + neutral",
            HarmonyGroup::BackNeutral => "back + neutral",
            HarmonyGroup::Inconclusive => "inconclusive",
            HarmonyGroup::Contradictory => "contradictory",
        }
    }

    /// False for the two negative results
    pub fn is_conclusive(&self) -> bool {
        !matches!(
            self,
            HarmonyGroup::Inconclusive | HarmonyGroup::Contradictory
        )
    }
}

impl fmt::Display for HarmonyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the driver renders for one word
#[derive(Debug, Clone, Serialize)]
pub struct WordAnalysis {
    pub word: String,
    pub gradation: Result<GradationOutcome, AnalysisError>,
    pub nominative_plural: String,
    pub harmony: HarmonyGroup,
    pub endings: &'static str,
}
