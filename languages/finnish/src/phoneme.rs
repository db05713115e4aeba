/// Finnish vowel inventory, lowercase
pub const FINNISH_VOWELS: [char; 8] = ['a', 'ä', 'e', 'i', 'o', 'ö', 'u', 'y'];

/// Vowels a Wordtype A nominative may end in ("e" does not belong to Wordtype A)
pub const WORDTYPE_A_VOWELS: [char; 7] = ['a', 'ä', 'i', 'o', 'ö', 'u', 'y'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phoneme {
    Vowel,
    /// Anything that is not a vowel, punctuation and digits included
    Consonant,
}

impl Phoneme {
    pub fn classify(c: char) -> Self {
        if FINNISH_VOWELS.contains(&fold(c)) {
            Phoneme::Vowel
        } else {
            Phoneme::Consonant
        }
    }
}

/// Lowercase a single character; Ä and Ö map to one char each
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

pub fn is_vowel(c: char) -> bool {
    Phoneme::classify(c) == Phoneme::Vowel
}

pub fn is_wordtype_a_vowel(c: char) -> bool {
    WORDTYPE_A_VOWELS.contains(&fold(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_case_insensitive() {
        for c in "aäeioöuyAÄEIOÖUY".chars() {
            assert_eq!(Phoneme::classify(c), Phoneme::Vowel, "{c}");
        }
    }

    #[test]
    fn everything_else_is_a_consonant() {
        for c in "kptnmlrsvhjdgbfKNT-'1 ".chars() {
            assert_eq!(Phoneme::classify(c), Phoneme::Consonant, "{c}");
        }
    }

    #[test]
    fn e_is_not_a_wordtype_a_vowel() {
        assert!(is_vowel('e'));
        assert!(!is_wordtype_a_vowel('e'));
        assert!(!is_wordtype_a_vowel('E'));
        assert!(is_wordtype_a_vowel('Ö'));
    }
}
