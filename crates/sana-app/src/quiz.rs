use std::io::{BufRead, Write};

use sana_core::language::LanguageProcessor;
use sana_core::types::GradationOutcome;

use crate::render;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Strong form right, weak form wrong
    HalfStrong,
    /// Weak form right, strong form wrong
    HalfWeak,
    Incorrect,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "Correct!",
            Verdict::HalfStrong | Verdict::HalfWeak => "Half correct!",
            Verdict::Incorrect => "Incorrect!",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: u32,
    pub half: u32,
    pub incorrect: u32,
    /// Words that could not be analysed for gradation
    pub skipped: u32,
}

impl Tally {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::HalfStrong | Verdict::HalfWeak => self.half += 1,
            Verdict::Incorrect => self.incorrect += 1,
        }
    }

    pub fn answered(&self) -> u32 {
        self.correct + self.half + self.incorrect
    }
}

/// Score a learner's strong/weak guess.
///
/// Empty guesses mean "no gradation"; an empty weak guess alone means the
/// strong consonant is deleted.
pub fn score(
    outcome: &GradationOutcome,
    guess_strong: &str,
    guess_weak: &str,
    case_sensitive: bool,
) -> Verdict {
    let guess_strong = guess_strong.trim();
    let guess_weak = guess_weak.trim();

    let same = |expected: &str, guess: &str| {
        if case_sensitive {
            expected == guess
        } else {
            expected.to_lowercase() == guess.to_lowercase()
        }
    };

    match outcome {
        GradationOutcome::NoGradation => {
            if guess_strong.is_empty() && guess_weak.is_empty() {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            }
        }
        GradationOutcome::Graded(result) => {
            match (same(&result.strong, guess_strong), same(&result.weak, guess_weak)) {
                (true, true) => Verdict::Correct,
                (true, false) => Verdict::HalfStrong,
                (false, true) => Verdict::HalfWeak,
                (false, false) => Verdict::Incorrect,
            }
        }
    }
}

/// Prompt and read one trimmed line; None on end of input
fn ask(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> anyhow::Result<Option<String>> {
    writeln!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    writeln!(out)?;
    Ok(Some(line.trim().to_string()))
}

/// Run the interactive gradation quiz for up to `rounds` words
pub fn run_quiz(
    state: &AppState,
    rounds: u32,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Tally> {
    let painter = &state.painter;
    let width = state.config.ui.rule_width;
    let mut tally = Tally::default();

    for round in 1..=rounds {
        render::rule(out, width)?;

        let Some(word) = ask(input, out, "Please input a Wordtype A nominal (nom. sing.):")? else {
            break;
        };
        if word.is_empty() {
            writeln!(out, "You must provide an input.")?;
            tally.skipped += 1;
            continue;
        }

        let Some(guess_strong) = ask(
            input,
            out,
            "Which consonant(s) do you think undergo/es gradation?:",
        )?
        else {
            break;
        };
        let Some(guess_weak) = ask(
            input,
            out,
            "Which consonant(s) do you think is/are produced from gradation?:",
        )?
        else {
            break;
        };

        let analysis = state.processor.analyze(&word);
        let outcome = match &analysis.gradation {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(round, word = %analysis.word, error = %e, "Skipping unanalysable word");
                writeln!(out, "{e}. Please try again with a Wordtype A word.")?;
                tally.skipped += 1;
                continue;
            }
        };

        let verdict = score(
            outcome,
            &guess_strong,
            &guess_weak,
            state.config.quiz.case_sensitive,
        );
        tracing::debug!(round, word = %analysis.word, ?verdict, "Scored guess");
        tally.record(verdict);

        render::write_verdict(
            out,
            painter,
            &analysis,
            outcome,
            verdict,
            (&guess_strong, &guess_weak),
        )?;

        if state.config.quiz.show_plural {
            writeln!(
                out,
                "The nominative plural form of {} is {}.",
                painter.word(&analysis.word),
                analysis.nominative_plural
            )?;
        }
    }

    render::rule(out, width)?;
    writeln!(
        out,
        "Score: {} correct, {} half correct, {} incorrect ({} answered, {} skipped)",
        tally.correct,
        tally.half,
        tally.incorrect,
        tally.answered(),
        tally.skipped
    )?;

    Ok(tally)
}
