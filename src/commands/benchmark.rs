//! Benchmark command
//!
//! Lets the helper play against every answer word and collects statistics.

use crate::core::{Feedback, MAX_GUESSES, Word};
use crate::solver::Session;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One self-played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub answer: String,
    pub guesses: Vec<String>,
    pub solved: bool,
}

impl GameRecord {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_guesses: f64,
    pub distribution: BTreeMap<usize, usize>,
    /// Solved words that needed 5 or 6 guesses, hardest first
    pub hardest: Vec<(String, usize)>,
    pub failures: Vec<String>,
    pub duration: Duration,
}

/// Play one game against `answer`, always guessing the top-ranked candidate
///
/// The session's own hints are ignored; every game starts from scratch.
#[must_use]
pub fn play_out(template: &Session, answer: &Word) -> GameRecord {
    let mut session = template.clone();
    session.reset();

    let mut guesses = Vec::with_capacity(MAX_GUESSES);
    let mut solved = false;

    for _ in 0..MAX_GUESSES {
        let Some(guess) = session.best_choices(1).best().map(|ranked| ranked.word.clone()) else {
            debug!("no candidates left for '{answer}'");
            break;
        };

        let feedback = Feedback::calculate(&guess, answer);
        guesses.push(guess.text().to_string());

        if feedback.is_solved() {
            solved = true;
            break;
        }
        session.apply_feedback(&guess, &feedback);
    }

    GameRecord {
        answer: answer.text().to_string(),
        guesses,
        solved,
    }
}

/// Self-play against `answers` (or the first `limit` of them) in parallel
#[must_use]
pub fn run_benchmark(
    vocabulary: Vec<Word>,
    answers: &[Word],
    limit: Option<usize>,
    show_progress: bool,
) -> BenchmarkResult {
    let answers = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];
    let template = Session::new(vocabulary);

    let pb = if show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let records: Vec<GameRecord> = answers
        .par_iter()
        .map(|answer| {
            let record = play_out(&template, answer);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&records, start.elapsed())
}

fn summarize(records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;

    for record in records {
        if record.solved {
            *distribution.entry(record.turns()).or_insert(0) += 1;
            total_guesses += record.turns();
        } else {
            failures.push(record.answer.clone());
        }
    }

    let solved = records.len() - failures.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(String, usize)> = records
        .iter()
        .filter(|r| r.solved && r.turns() >= 5)
        .map(|r| (r.answer.clone(), r.turns()))
        .collect();
    hardest.sort_by_key(|(_, turns)| std::cmp::Reverse(*turns));
    hardest.truncate(10);

    BenchmarkResult {
        total_words: records.len(),
        solved,
        failed: failures.len(),
        average_guesses,
        distribution,
        hardest,
        failures,
        duration,
    }
}
