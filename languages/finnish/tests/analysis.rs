use sana_core::language::LanguageProcessor;
use sana_core::types::{GradationOutcome, HarmonyGroup};
use sana_lang_finnish::{
    FinnishProcessor, classify_harmony, example_nominative_plural, final_syllable,
    preceding_syllables, resolve_gradation,
};

const WORDS: &[&str] = &[
    "Afrikka", "Hollanti", "Suomi", "Helsinki", "Turku", "Ruotsi", "Jyväskylä", "kauppa",
    "Rovaniemi", "Venäjä", "Korea", "katu", "apu",
];

#[test]
fn reference_gradations() {
    let expect = |word: &str, strong: &str, weak: &str, transformed: &str| {
        let Ok(GradationOutcome::Graded(result)) = resolve_gradation(word) else {
            panic!("{word} should grade");
        };
        assert_eq!(result.strong, strong);
        assert_eq!(result.weak, weak);
        assert_eq!(result.transformed, transformed);
    };

    expect("Afrikka", "kk", "k", "ka");
    expect("Hollanti", "nt", "nn", "nni");
    assert_eq!(resolve_gradation("Suomi"), Ok(GradationOutcome::NoGradation));
}

#[test]
fn ungraded_words_pluralize_with_t() {
    for word in WORDS {
        if let Ok(GradationOutcome::NoGradation) = resolve_gradation(word) {
            assert_eq!(example_nominative_plural(word), format!("{word}t"));
        }
    }
}

#[test]
fn final_syllable_is_a_suffix_and_rebuilds_the_word() {
    for word in WORDS {
        let (Ok(preceding), Ok(last)) = (preceding_syllables(word), final_syllable(word)) else {
            continue;
        };
        assert!(word.ends_with(last), "{word}");
        assert_eq!(format!("{preceding}{last}"), *word);
    }
}

#[test]
fn harmony_reference_words() {
    assert_eq!(classify_harmony("Oulu"), HarmonyGroup::Front);
    assert_eq!(classify_harmony("Jyväskylää"), HarmonyGroup::Back);
    assert_eq!(classify_harmony("Rovaniemi"), HarmonyGroup::FrontNeutral);
    assert_eq!(classify_harmony("Sveitsi"), HarmonyGroup::Neutral);
}

#[test]
fn harmony_is_case_invariant() {
    for word in WORDS {
        assert_eq!(classify_harmony(word), classify_harmony(&word.to_uppercase()));
    }
}

#[test]
fn analysis_serializes_to_json() {
    let analysis = FinnishProcessor::new().analyze("Afrikka");
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["word"], "Afrikka");
    assert_eq!(json["harmony"], "front_neutral");
    assert_eq!(json["nominative_plural"], "Afrikat");
    assert_eq!(json["gradation"]["Ok"]["status"], "graded");
    assert_eq!(json["gradation"]["Ok"]["weak"], "k");

    let analysis = FinnishProcessor::new().analyze("ja");
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["gradation"]["Err"]["error"], "insufficient_syllables");
}
