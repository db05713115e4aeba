use serde::Serialize;

/// Reasons a word cannot be split into syllables for gradation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum AnalysisError {
    #[error("Empty input: a word is required")]
    EmptyWord,

    #[error(
        "The word \"{word}\" does not belong to Wordtype A, which ends in one of the vowels a, ä, i, o, ö, u, y"
    )]
    InvalidWordType { word: String },

    #[error("The word \"{word}\" must have 2 or more syllables")]
    InsufficientSyllables { word: String },
}

/// Rejected entries when building a gradation rule table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Strong form \"{0}\" must be 1 or 2 characters")]
    InvalidStrongForm(String),

    #[error("Weak form \"{weak}\" for \"{strong}\" must be at most 2 characters")]
    InvalidWeakForm { strong: String, weak: String },

    #[error("Duplicate strong form: {0}")]
    DuplicateStrongForm(String),
}
