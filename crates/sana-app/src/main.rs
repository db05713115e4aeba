use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sana_core::language::LanguageProcessor;
use tracing_subscriber::EnvFilter;

pub mod profile;
pub mod quiz;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

#[derive(Parser)]
#[command(
    name = "sana",
    version,
    about = "Practice Finnish consonant gradation and vowel harmony"
)]
struct Cli {
    /// JSON config file (defaults to $SANA_CONFIG, then ./sana.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable bold/blue highlighting
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explain the consonant gradation of a Wordtype A nominal
    Gradation {
        word: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the vowel harmony group and matching endings
    Harmony {
        word: String,
        #[arg(long)]
        json: bool,
    },
    /// Gradation and vowel harmony together
    Explain {
        word: String,
        #[arg(long)]
        json: bool,
    },
    /// List the strong -> weak gradation table
    Rules,
    /// Guess the strong and weak grades of words you enter
    Quiz {
        /// Number of words (defaults to the configured value)
        #[arg(long)]
        rounds: Option<u32>,
    },
}

fn init_tracing(directives: &str, json: bool) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("Invalid log filter \"{directives}\": {e}");
        EnvFilter::new("warn")
    });

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let loaded = profile::load_config(cli.config.as_deref())?;
    let mut config = loaded.config;

    init_tracing(&profile::log_filter(&config), cli.log_json);
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("No config file found, using environment defaults"),
    }

    if cli.no_color {
        config.ui.color = false;
    }

    let state = AppState::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(&state, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(state: &AppState, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    let painter = &state.painter;

    match command {
        Command::Gradation { word, json } => {
            let analysis = state.processor.analyze(&word);
            if json {
                let value = serde_json::json!({
                    "word": analysis.word,
                    "gradation": analysis.gradation,
                    "nominative_plural": analysis.nominative_plural,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                render::write_gradation(out, painter, &analysis)?;
            }
        }
        Command::Harmony { word, json } => {
            let analysis = state.processor.analyze(&word);
            if json {
                let value = serde_json::json!({
                    "word": analysis.word,
                    "harmony": analysis.harmony,
                    "endings": analysis.endings,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                render::write_harmony(out, painter, &analysis)?;
            }
        }
        Command::Explain { word, json } => {
            let analysis = state.processor.analyze(&word);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
            } else {
                render::write_gradation(out, painter, &analysis)?;
                writeln!(out)?;
                render::write_harmony(out, painter, &analysis)?;
            }
        }
        Command::Rules => render::write_rules(out, state.processor.gradator().rules())?,
        Command::Quiz { rounds } => {
            let rounds = rounds.unwrap_or(state.config.quiz.rounds);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            quiz::run_quiz(state, rounds, &mut input, out)?;
        }
    }

    Ok(())
}
