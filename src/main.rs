//! Wordle Helper - CLI
//!
//! Command shell, full-screen TUI, a playable game and a self-play benchmark
//! over one vocabulary.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::io;
use wordle_helper::{
    commands::{
        Shell, run_benchmark, run_play, run_shell,
        shell::{parse_letter, parse_letters, parse_positions},
    },
    core::{Constraints, Green, Word},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_ranking},
    solver::Session,
    wordlists::{
        ANSWERS, VOCABULARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: filter a vocabulary by green/yellow/gray hints and rank guesses by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded vocabulary) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented command shell (default)
    Shell,

    /// Full-screen TUI over the same commands
    Tui,

    /// Play Wordle against a random answer
    Play {
        /// Show the best choices after every guess
        #[arg(long)]
        assist: bool,

        /// Number of suggestions shown with --assist
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Best opening guesses for the vocabulary
    Openers {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Best guesses for a set of hints
    Choices {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Green pattern, '.' for unknown (e.g. '.r..e')
        #[arg(long)]
        green: Option<String>,

        /// Yellow letter with the positions it is not at, e.g. 'e:1,3' (repeatable)
        #[arg(long)]
        yellow: Vec<String>,

        /// Comma-separated gray letters (e.g. 'a,p')
        #[arg(long)]
        gray: Option<String>,
    },

    /// Let the helper play every answer word and report statistics
    Benchmark {
        /// Limit number of answer words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "default" => Ok(words_from_slice(VOCABULARY)),
        path => load_from_file(path).with_context(|| format!("Failed to open file '{path}'")),
    }
}

/// Answer pool for play and benchmark: embedded answers present in the vocabulary
///
/// Falls back to the whole vocabulary when none of them are.
fn answer_pool(vocabulary: &[Word]) -> Vec<Word> {
    let answers: Vec<Word> = words_from_slice(ANSWERS)
        .into_iter()
        .filter(|answer| vocabulary.contains(answer))
        .collect();

    if answers.is_empty() {
        info!("no embedded answers in the vocabulary, drawing from the vocabulary itself");
        vocabulary.to_vec()
    } else {
        answers
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let vocabulary = load_vocabulary(&cli.wordlist)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut shell = Shell::new(Session::new(vocabulary));
            run_shell(&mut shell, io::stdin().lock(), io::stdout().lock())
                .context("Shell I/O failed")
        }
        Commands::Tui => run_tui(App::new(Session::new(vocabulary))),
        Commands::Play { assist, count } => {
            let answers = answer_pool(&vocabulary);
            run_play(
                &vocabulary,
                &answers,
                assist.then_some(count),
                &mut rand::rng(),
                io::stdin().lock(),
                io::stdout().lock(),
            )
            .context("Game I/O failed")
        }
        Commands::Openers { count } => {
            let session = Session::new(vocabulary);
            print_ranking("Best openers", &session.best_openers(count));
            Ok(())
        }
        Commands::Choices {
            count,
            green,
            yellow,
            gray,
        } => {
            let constraints = build_constraints(green.as_deref(), &yellow, gray.as_deref())?;
            let session = Session::with_constraints(vocabulary, constraints);
            print_ranking("Best choices", &session.best_choices(count));
            Ok(())
        }
        Commands::Benchmark { limit } => {
            let answers = answer_pool(&vocabulary);
            let total = limit.map_or(answers.len(), |limit| limit.min(answers.len()));
            println!("Playing {total} answer words...");
            let result = run_benchmark(vocabulary, &answers, limit, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Hints from the `choices` flags
fn build_constraints(
    green: Option<&str>,
    yellow: &[String],
    gray: Option<&str>,
) -> Result<Constraints> {
    let mut constraints = Constraints::new();

    if let Some(pattern) = green {
        let green: Green = pattern
            .parse()
            .with_context(|| format!("Invalid --green '{pattern}'"))?;
        constraints.set_green(green);
    }

    for entry in yellow {
        let (letter, positions) = entry
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid --yellow '{entry}': expected <letter>:<positions>"))?;
        let letter = parse_letter(letter)
            .ok_or_else(|| anyhow!("Invalid --yellow '{entry}': not a single letter"))?;
        let positions =
            parse_positions(positions).with_context(|| format!("Invalid --yellow '{entry}'"))?;
        constraints.add_yellow(letter, positions);
    }

    if let Some(letters) = gray {
        let letters = parse_letters(letters).with_context(|| format!("Invalid --gray '{letters}'"))?;
        constraints.add_gray(letters);
    }

    Ok(constraints)
}
