//! Formatting utilities for terminal output

use crate::core::{Feedback, Game, MAX_GUESSES, Tile, Word};
use crate::solver::Ranking;
use colored::{ColoredString, Colorize};

/// Placeholder row for a guess not yet made
pub const EMPTY_ROW: &str = "-----";

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A single letter painted with its tile colour; unrevealed letters stay plain
#[must_use]
pub fn colored_letter(letter: u8, tile: Option<Tile>) -> ColoredString {
    let text = char::from(letter).to_string();
    match tile {
        Some(Tile::Green) => text.black().on_green(),
        Some(Tile::Yellow) => text.black().on_yellow(),
        Some(Tile::Gray) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One guess as a row of coloured tiles
#[must_use]
pub fn board_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.tiles())
        .map(|(&letter, &tile)| colored_letter(letter, Some(tile)).to_string())
        .collect()
}

/// All six rows of a game, unused rows shown as `-----`
#[must_use]
pub fn board(game: &Game<'_>) -> Vec<String> {
    let mut rows: Vec<String> = game
        .guesses()
        .iter()
        .map(|(guess, feedback)| board_row(guess, feedback))
        .collect();
    rows.resize(MAX_GUESSES, EMPTY_ROW.to_string());
    rows
}

/// The alphabet, each letter coloured by the best tile it has shown
#[must_use]
pub fn alphabet(game: &Game<'_>) -> String {
    ALPHABET
        .iter()
        .map(|&letter| colored_letter(letter, game.letter_state(letter)).to_string())
        .collect()
}

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .tiles()
        .iter()
        .map(|tile| match tile {
            Tile::Gray => '⬜',
            Tile::Yellow => '🟨',
            Tile::Green => '🟩',
        })
        .collect()
}

/// Numbered ranking lines: `  1. CRANE  (score 7)`
#[must_use]
pub fn ranking_lines(ranking: &Ranking<'_>) -> Vec<String> {
    ranking
        .iter()
        .enumerate()
        .map(|(i, ranked)| {
            format!(
                "{:3}. {}  (score {})",
                i + 1,
                ranked.word.text().to_uppercase(),
                ranked.score
            )
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
