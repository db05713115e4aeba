use sana_core::error::AnalysisError;
use sana_core::types::VowelPosition;

use crate::phoneme::{is_vowel, is_wordtype_a_vowel};

/// Every vowel in `word` with its byte offset, left to right.
pub fn vowel_positions(word: &str) -> Vec<VowelPosition> {
    word.char_indices()
        .filter(|(_, c)| is_vowel(*c))
        .map(|(index, vowel)| VowelPosition { index, vowel })
        .collect()
}

/// Byte offset just past the second-to-last vowel
fn penultimate_vowel_end(vowels: &[VowelPosition]) -> Option<usize> {
    let position = vowels.len().checked_sub(2).map(|i| vowels[i])?;
    Some(position.index + position.vowel.len_utf8())
}

/// Extract the final syllable of a Wordtype A word.
///
/// The word type is validated before the syllable count, so a word that
/// ends in "e" is always `InvalidWordType` regardless of its length.
pub fn final_syllable(word: &str) -> Result<&str, AnalysisError> {
    let last = word.chars().last().ok_or(AnalysisError::EmptyWord)?;

    if !is_wordtype_a_vowel(last) {
        return Err(AnalysisError::InvalidWordType {
            word: word.to_string(),
        });
    }

    let vowels = vowel_positions(word);
    if let Some(start) = penultimate_vowel_end(&vowels) {
        return Ok(&word[start..]);
    }

    let sole_vowel_is_last = vowels
        .last()
        .is_some_and(|v| v.index + v.vowel.len_utf8() == word.len());

    if sole_vowel_is_last {
        Err(AnalysisError::InsufficientSyllables {
            word: word.to_string(),
        })
    } else {
        Err(AnalysisError::InvalidWordType {
            word: word.to_string(),
        })
    }
}

/// Everything up to and including the second-to-last vowel
pub fn preceding_syllables(word: &str) -> Result<&str, AnalysisError> {
    let vowels = vowel_positions(word);
    penultimate_vowel_end(&vowels)
        .map(|end| &word[..end])
        .ok_or_else(|| AnalysisError::InsufficientSyllables {
            word: word.to_string(),
        })
}
