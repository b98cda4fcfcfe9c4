//! A playable Wordle round
//!
//! Holds the hidden answer, the guesses made so far and the best colour seen
//! for every letter of the alphabet. No terminal I/O lives here.

use super::feedback::{Feedback, Tile};
use super::word::{WORD_LEN, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Must be 5 letters!")]
    Length,
    #[error("Not in the vocabulary!")]
    UnknownWord,
    #[error("The round is already over")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub state: GameState,
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct Game<'a> {
    answer: Word,
    vocabulary: FxHashSet<&'a str>,
    guesses: Vec<(Word, Feedback)>,
    alphabet: [Option<Tile>; 26],
}

impl<'a> Game<'a> {
    /// Start a round with a known answer; guesses must come from `vocabulary`
    #[must_use]
    pub fn new(answer: Word, vocabulary: &'a [Word]) -> Self {
        Self {
            answer,
            vocabulary: vocabulary.iter().map(Word::text).collect(),
            guesses: Vec::with_capacity(MAX_GUESSES),
            alphabet: [None; 26],
        }
    }

    /// Start a round with an answer drawn uniformly from `answers`
    ///
    /// Returns `None` when `answers` is empty.
    pub fn random<R: Rng + ?Sized>(
        answers: &[Word],
        vocabulary: &'a [Word],
        rng: &mut R,
    ) -> Option<Self> {
        let answer = answers.choose(rng)?.clone();
        Some(Self::new(answer, vocabulary))
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[(Word, Feedback)] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        match self.guesses.last() {
            Some((_, feedback)) if feedback.is_solved() => GameState::Won,
            _ if self.guesses.len() >= MAX_GUESSES => GameState::Lost,
            _ => GameState::InProgress,
        }
    }

    /// Best colour revealed so far for `letter` (green beats yellow beats gray)
    #[must_use]
    pub fn letter_state(&self, letter: u8) -> Option<Tile> {
        letter
            .is_ascii_lowercase()
            .then(|| self.alphabet[usize::from(letter - b'a')])
            .flatten()
    }

    /// Play a guess and get its colouring
    ///
    /// # Errors
    ///
    /// [`GameError::Length`] for anything but five characters,
    /// [`GameError::UnknownWord`] for words outside the vocabulary and
    /// [`GameError::Finished`] once the round is won or lost.
    pub fn guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        if self.state() != GameState::InProgress {
            return Err(GameError::Finished);
        }

        let text = text.trim();
        if text.chars().count() != WORD_LEN {
            return Err(GameError::Length);
        }

        let word = Word::new(text).map_err(|_| GameError::UnknownWord)?;
        if !self.vocabulary.contains(word.text()) {
            return Err(GameError::UnknownWord);
        }

        let feedback = Feedback::calculate(&word, &self.answer);
        for (&letter, &tile) in word.chars().iter().zip(feedback.tiles()) {
            let seen = &mut self.alphabet[usize::from(letter - b'a')];
            *seen = (*seen).max(Some(tile));
        }
        self.guesses.push((word, feedback));

        Ok(GuessOutcome {
            feedback,
            state: self.state(),
        })
    }
}
