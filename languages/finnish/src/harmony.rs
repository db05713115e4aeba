//! Vowel harmony for native, non-compound words.
//!
//! A native non-compound word never mixes vowels from {a, o, u} with
//! vowels from {ä, ö, y}; {i, e} combine with either camp.

use std::collections::BTreeSet;

use sana_core::language::HarmonyClassifier;
use sana_core::types::HarmonyGroup;

use crate::phoneme::{fold, is_vowel};

const AOU: &[char] = &['a', 'o', 'u'];
const AE_OE_Y: &[char] = &['ä', 'ö', 'y'];
const NEUTRAL: &[char] = &['i', 'e'];

const BACK_ENDINGS: &str = "-ssä, -vät, -kö";
const FRONT_ENDINGS: &str = "-ssa, -vat, -ko";
const UNKNOWN_ENDINGS: &str = "unknown";

/// Distinct lowercase vowels of `word`
pub fn vowel_set(word: &str) -> BTreeSet<char> {
    word.chars().filter(|c| is_vowel(*c)).map(fold).collect()
}

fn within(vowels: &BTreeSet<char>, groups: &[&[char]]) -> bool {
    vowels
        .iter()
        .all(|v| groups.iter().any(|group| group.contains(v)))
}

/// Classify a set of distinct lowercase vowels.
///
/// Pure-neutral sets are tested first: {i, e} is a subset of both mixed
/// groups.
pub fn classify_vowels(vowels: &BTreeSet<char>) -> HarmonyGroup {
    if vowels.is_empty() {
        HarmonyGroup::Inconclusive
    } else if within(vowels, &[NEUTRAL]) {
        HarmonyGroup::Neutral
    } else if within(vowels, &[AE_OE_Y]) {
        HarmonyGroup::Back
    } else if within(vowels, &[AE_OE_Y, NEUTRAL]) {
        HarmonyGroup::BackNeutral
    } else if within(vowels, &[AOU]) {
        HarmonyGroup::Front
    } else if within(vowels, &[AOU, NEUTRAL]) {
        HarmonyGroup::FrontNeutral
    } else {
        HarmonyGroup::Contradictory
    }
}

pub fn classify_harmony(word: &str) -> HarmonyGroup {
    let group = classify_vowels(&vowel_set(word));
    if group == HarmonyGroup::Contradictory {
        tracing::debug!(word, "Mixed a/o/u and ä/ö/y vowels, likely a compound or loanword");
    }
    group
}

/// Example suffixes for a harmony group
pub fn example_endings(group: HarmonyGroup) -> &'static str {
    match group {
        HarmonyGroup::Neutral | HarmonyGroup::Back | HarmonyGroup::BackNeutral => BACK_ENDINGS,
        HarmonyGroup::Front | HarmonyGroup::FrontNeutral => FRONT_ENDINGS,
        HarmonyGroup::Inconclusive | HarmonyGroup::Contradictory => UNKNOWN_ENDINGS,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FinnishHarmony;

impl HarmonyClassifier for FinnishHarmony {
    fn classify(&self, word: &str) -> HarmonyGroup {
        classify_harmony(word)
    }

    fn example_endings(&self, group: HarmonyGroup) -> &'static str {
        example_endings(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_words() {
        assert_eq!(classify_harmony("Oulu"), HarmonyGroup::Front);
        assert_eq!(classify_harmony("Saksa"), HarmonyGroup::Front);
        assert_eq!(classify_harmony("Jyväskylää"), HarmonyGroup::Back);
        assert_eq!(classify_harmony("Rovaniemi"), HarmonyGroup::FrontNeutral);
        assert_eq!(classify_harmony("Suomi"), HarmonyGroup::FrontNeutral);
        assert_eq!(classify_harmony("Venäjä"), HarmonyGroup::BackNeutral);
        assert_eq!(classify_harmony("Sveitsi"), HarmonyGroup::Neutral);
    }

    #[test]
    fn no_vowels_is_inconclusive() {
        assert_eq!(classify_harmony(""), HarmonyGroup::Inconclusive);
        assert_eq!(classify_harmony("brr"), HarmonyGroup::Inconclusive);
    }

    #[test]
    fn mixed_camps_are_contradictory() {
        assert_eq!(classify_harmony("olutkänny"), HarmonyGroup::Contradictory);
        assert_eq!(classify_harmony("Olympia"), HarmonyGroup::Contradictory);
    }

    #[test]
    fn case_does_not_matter() {
        for word in ["Oulu", "Jyväskylää", "Rovaniemi", "Sveitsi", "Venäjä"] {
            assert_eq!(classify_harmony(word), classify_harmony(&word.to_uppercase()));
        }
    }

    #[test]
    fn only_the_vowel_set_matters() {
        assert_eq!(classify_harmony("talo"), classify_harmony("ootaaloo"));
        assert_eq!(classify_harmony("kivi"), classify_harmony("eeiiie"));
    }

    #[test]
    fn endings_follow_group() {
        assert_eq!(example_endings(HarmonyGroup::Front), "-ssa, -vat, -ko");
        assert_eq!(example_endings(HarmonyGroup::FrontNeutral), "-ssa, -vat, -ko");
        assert_eq!(example_endings(HarmonyGroup::Back), "-ssä, -vät, -kö");
        assert_eq!(example_endings(HarmonyGroup::BackNeutral), "-ssä, -vät, -kö");
        assert_eq!(example_endings(HarmonyGroup::Neutral), "-ssä, -vät, -kö");
        assert_eq!(example_endings(HarmonyGroup::Inconclusive), "unknown");
        assert_eq!(example_endings(HarmonyGroup::Contradictory), "unknown");
    }
}
