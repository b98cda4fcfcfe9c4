//! Accumulated hints about the hidden word
//!
//! - [`Green`]: letters known to be at a specific position
//! - [`Yellow`]: letters known to be in the word, with the positions they are known *not* to be at
//! - gray: a [`LetterSet`] of letters known not to be in the word (beyond any green/yellow copies)
//!
//! Hints only accumulate; a contradictory combination is not an error, it simply
//! leaves no candidates.

use super::feedback::{Feedback, Tile};
use super::letters::LetterSet;
use super::word::{WORD_LEN, Word};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder for an unknown green slot
pub const UNKNOWN: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Green pattern must be exactly 5 characters, got {0}")]
    GreenLength(usize),
    #[error("'{0}' is not an ASCII letter")]
    InvalidLetter(char),
}

/// Letters confirmed at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Green([Option<u8>; WORD_LEN]);

impl Green {
    /// All five slots unknown (`.....`)
    #[must_use]
    pub const fn unknown() -> Self {
        Self([None; WORD_LEN])
    }

    /// Required letter at `pos`, if any
    ///
    /// # Panics
    /// Panics if `pos >= 5`
    #[must_use]
    pub const fn get(&self, pos: usize) -> Option<u8> {
        self.0[pos]
    }

    /// Require `letter` at `pos`
    ///
    /// # Panics
    /// Panics if `pos >= 5`
    pub fn set(&mut self, pos: usize, letter: u8) {
        self.0[pos] = Some(letter.to_ascii_lowercase());
    }

    /// True when no slot is known
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Iterate over `(position, letter)` for every known slot
    pub fn required(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.map(|letter| (pos, letter)))
    }
}

impl FromStr for Green {
    type Err = ConstraintError;

    /// ASCII letters become required letters (case-folded); any other ASCII
    /// character marks an unknown slot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LEN {
            return Err(ConstraintError::GreenLength(len));
        }

        let mut green = Self::unknown();
        for (pos, ch) in s.chars().enumerate() {
            if !ch.is_ascii() {
                return Err(ConstraintError::InvalidLetter(ch));
            }
            if ch.is_ascii_alphabetic() {
                green.set(pos, ch as u8);
            }
        }
        Ok(green)
    }
}

impl fmt::Display for Green {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .map(|slot| slot.map_or(UNKNOWN, char::from))
            .try_for_each(|ch| write!(f, "{ch}"))
    }
}

/// Letters in the word at an unknown position, with the positions ruled out
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Yellow(BTreeMap<u8, BTreeSet<usize>>);

impl Yellow {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record `letter` as present but not at any of `positions`
    ///
    /// Positions for a letter that is already known are unioned in.
    pub fn add(&mut self, letter: u8, positions: impl IntoIterator<Item = usize>) {
        self.0
            .entry(letter.to_ascii_lowercase())
            .or_default()
            .extend(positions);
    }

    /// Forget everything about `letter`; returns `false` if it was not recorded
    pub fn remove(&mut self, letter: u8) -> bool {
        self.0.remove(&letter.to_ascii_lowercase()).is_some()
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains_key(&letter)
    }

    /// Positions ruled out for `letter`
    #[must_use]
    pub fn forbidden(&self, letter: u8) -> Option<&BTreeSet<usize>> {
        self.0.get(&letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BTreeSet<usize>)> {
        self.0.iter().map(|(&letter, positions)| (letter, positions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Yellow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (letter, positions)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
            write!(f, "{}=[{}]", char::from(letter), positions.join(", "))?;
        }
        f.write_str("}")
    }
}

/// Everything known about the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    green: Green,
    yellow: Yellow,
    gray: LetterSet,
}

impl Constraints {
    /// No hints at all
    #[must_use]
    pub const fn new() -> Self {
        Self {
            green: Green::unknown(),
            yellow: Yellow::new(),
            gray: LetterSet::new(),
        }
    }

    #[must_use]
    pub const fn green(&self) -> &Green {
        &self.green
    }

    #[must_use]
    pub const fn yellow(&self) -> &Yellow {
        &self.yellow
    }

    #[must_use]
    pub const fn gray(&self) -> LetterSet {
        self.gray
    }

    /// True when nothing is known yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_unknown() && self.yellow.is_empty() && self.gray.is_empty()
    }

    /// Back to the empty state ("new game")
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace the green pattern wholesale
    pub fn set_green(&mut self, green: Green) {
        self.green = green;
    }

    pub fn add_yellow(&mut self, letter: u8, positions: impl IntoIterator<Item = usize>) {
        self.yellow.add(letter, positions);
    }

    /// Remove yellow letters, returning those that were not recorded
    pub fn remove_yellow(&mut self, letters: impl IntoIterator<Item = u8>) -> Vec<u8> {
        letters
            .into_iter()
            .filter(|&letter| !self.yellow.remove(letter))
            .collect()
    }

    /// Add gray letters; adding one twice is harmless
    pub fn add_gray(&mut self, letters: impl IntoIterator<Item = u8>) {
        for letter in letters {
            self.gray.insert(letter.to_ascii_lowercase());
        }
    }

    /// Remove gray letters, returning those that were not recorded
    pub fn remove_gray(&mut self, letters: impl IntoIterator<Item = u8>) -> Vec<u8> {
        letters
            .into_iter()
            .filter(|&letter| !self.gray.remove(letter.to_ascii_lowercase()))
            .collect()
    }

    /// Fold the colouring of one guess into the hints
    ///
    /// A gray tile whose letter is yellow in this (or an earlier) guess only
    /// rules out that position. Otherwise the letter goes to gray; any green
    /// copies are consumed before the gray check, so this reads as "no copies
    /// beyond the green ones".
    ///
    /// A letter is never gray and yellow at once: a yellow tile for a gray
    /// letter moves it from gray to yellow.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let tiles = feedback.tiles();

        for (pos, (&letter, &tile)) in guess.chars().iter().zip(tiles).enumerate() {
            match tile {
                Tile::Green => self.green.set(pos, letter),
                Tile::Yellow => {
                    self.yellow.add(letter, [pos]);
                    self.gray.remove(letter);
                }
                Tile::Gray => {}
            }
        }

        for (pos, (&letter, &tile)) in guess.chars().iter().zip(tiles).enumerate() {
            if tile != Tile::Gray {
                continue;
            }
            if self.yellow.contains(letter) {
                self.yellow.add(letter, [pos]);
            } else {
                self.gray.insert(letter);
            }
        }
    }
}
