use std::io::{self, Write};

use crossterm::style::Stylize;
use sana_core::types::{GradationOutcome, GradationResult, WordAnalysis};
use sana_lang_finnish::GradationRules;

use crate::quiz::Verdict;

/// Terminal highlighting, off when colour is disabled or piped
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn for_stdout(enabled: bool) -> Self {
        Self {
            color: enabled && atty::is(atty::Stream::Stdout),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Headword: upper-cased, bold blue
    pub fn word(&self, word: &str) -> String {
        let word = word.to_uppercase();
        if self.color {
            word.blue().bold().to_string()
        } else {
            word
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn blue(&self, text: &str) -> String {
        if self.color {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }
}

fn weak_label(weak: &str) -> &str {
    if weak.is_empty() { "(deleted)" } else { weak }
}

pub fn rule(out: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width))
}

fn write_graded(
    out: &mut impl Write,
    painter: &Painter,
    word: &str,
    result: &GradationResult,
) -> io::Result<()> {
    writeln!(
        out,
        "The word {} undergoes the following consonant gradation: {} -> {}",
        painter.word(word),
        result.strong,
        painter.bold(&painter.blue(weak_label(&result.weak)))
    )
}

pub fn write_gradation(
    out: &mut impl Write,
    painter: &Painter,
    analysis: &WordAnalysis,
) -> io::Result<()> {
    match &analysis.gradation {
        Ok(GradationOutcome::Graded(result)) => {
            write_graded(out, painter, &analysis.word, result)?;
            writeln!(out, "Weak final syllable: {}", result.transformed)?;
        }
        Ok(GradationOutcome::NoGradation) => writeln!(
            out,
            "The word {} either does not undergo consonant gradation or its gradation is not recognized.",
            painter.word(&analysis.word)
        )?,
        Err(e) => writeln!(out, "{e}. Please try again with a multisyllabic Wordtype A word.")?,
    }

    writeln!(
        out,
        "The nominative plural form of {} is {}.",
        painter.word(&analysis.word),
        analysis.nominative_plural
    )
}

/// Gradation table in lookup order
pub fn write_rules(out: &mut impl Write, rules: &GradationRules) -> io::Result<()> {
    writeln!(out, "Wordtype A gradation (strong -> weak):")?;
    for rule in rules.iter() {
        writeln!(out, "  {:<2} -> {}", rule.strong, weak_label(&rule.weak))?;
    }
    Ok(())
}

pub fn write_harmony(
    out: &mut impl Write,
    painter: &Painter,
    analysis: &WordAnalysis,
) -> io::Result<()> {
    writeln!(
        out,
        "The corresponding vowel group for {}: {}",
        painter.word(&analysis.word),
        analysis.harmony
    )?;
    if !analysis.harmony.is_conclusive() {
        writeln!(
            out,
            "Expected a native, non-compound Finnish word with at least one vowel."
        )?;
    }
    writeln!(out, "Examples of valid endings: {}", painter.blue(analysis.endings))
}

pub fn write_verdict(
    out: &mut impl Write,
    painter: &Painter,
    analysis: &WordAnalysis,
    outcome: &GradationOutcome,
    verdict: Verdict,
    guess: (&str, &str),
) -> io::Result<()> {
    let (guess_strong, guess_weak) = guess;
    writeln!(out)?;
    writeln!(out, "{}", painter.bold(verdict.as_str()))?;
    writeln!(out)?;

    let result = match outcome {
        GradationOutcome::NoGradation => {
            return writeln!(
                out,
                "The word {} does not undergo consonant gradation.",
                painter.word(&analysis.word)
            );
        }
        GradationOutcome::Graded(result) => result,
    };

    match verdict {
        Verdict::Correct => {}
        Verdict::HalfStrong => {
            writeln!(
                out,
                "You guessed the correct STRONG form {}.",
                painter.bold(guess_strong)
            )?;
            writeln!(
                out,
                "However, you guessed the wrong WEAK form: it is not {}, but rather {}.",
                guess_weak,
                painter.bold(&painter.blue(weak_label(&result.weak)))
            )?;
        }
        Verdict::HalfWeak => {
            writeln!(out, "You guessed the correct WEAK form {}.", guess_weak)?;
            writeln!(
                out,
                "However, you guessed the wrong STRONG form: it is not {}, but rather {}.",
                guess_strong,
                painter.bold(&result.strong)
            )?;
        }
        Verdict::Incorrect => {
            writeln!(
                out,
                "You guessed the STRONG form {} and WEAK form {}.",
                guess_strong, guess_weak
            )?;
        }
    }

    write_graded(out, painter, &analysis.word, result)
}
