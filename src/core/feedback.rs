//! Wordle feedback for a single guess
//!
//! Each position of a guess is coloured:
//! - Green: right letter, right position
//! - Yellow: letter is in the answer, but elsewhere
//! - Gray: letter is not in the answer (or every copy is already accounted for)

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Colour of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Gray,
    Yellow,
    Green,
}

impl Tile {
    /// Single-character code used for parsing and plain display
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
        }
    }
}

/// The colouring of a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tile; WORD_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid feedback pattern '{0}': use 5 of G/Y/- (e.g. GY-GY)")]
pub struct FeedbackError(String);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Tile::Green; WORD_LEN]);

    /// Colour `guess` against the hidden `answer`
    ///
    /// Greens are assigned first and consume their answer letter, then yellows
    /// are handed out left to right from the answer letters still unused, so a
    /// repeated guess letter is only yellow as many times as the answer can
    /// account for.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "--Y-Y");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut tiles = [Tile::Gray; WORD_LEN];
        let mut unused = [0_u8; 26];

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                tiles[i] = Tile::Green;
            } else {
                unused[usize::from(a - b'a')] += 1;
            }
        }

        for (tile, &g) in tiles.iter_mut().zip(guess.chars()) {
            let slot = &mut unused[usize::from(g - b'a')];
            if *tile == Tile::Gray && *slot > 0 {
                *tile = Tile::Yellow;
                *slot -= 1;
            }
        }

        Self(tiles)
    }

    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    /// Check if every tile is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(FeedbackError(s.to_string()));
        }

        let mut tiles = [Tile::Gray; WORD_LEN];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' => Tile::Green,
                'Y' | 'y' => Tile::Yellow,
                '-' | '_' | '.' => Tile::Gray,
                _ => return Err(FeedbackError(s.to_string())),
            };
        }

        Ok(Self(tiles))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|tile| write!(f, "{}", tile.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colour(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Feedback::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn all_gray() {
        assert_eq!(colour("abcde", "fghij"), "-----");
    }

    #[test]
    fn exact_match_is_solved() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&word, &word);
        assert!(feedback.is_solved());
        assert_eq!(feedback, Feedback::SOLVED);
    }

    #[test]
    fn classic_example() {
        // R is gray because SLATE has no R
        assert_eq!(colour("crane", "slate"), "--G-G");
    }

    #[test]
    fn duplicate_guess_letters_share_one_answer_letter() {
        // FLOOR has two O's; ROBOT's second O is green, first one yellow
        assert_eq!(colour("robot", "floor"), "YY-G-");
        // only one E in ABIDE, and the green-less first E takes the yellow
        assert_eq!(colour("speed", "abide"), "--Y-Y");
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // the E at index 4 is green, so the leading E's have nothing left
        assert_eq!(colour("eerie", "crane"), "--Y-G");
    }

    #[test]
    fn parse_round_trip() {
        let feedback: Feedback = "gY-_.".parse().unwrap();
        assert_eq!(feedback.to_string(), "GY---");
        assert_eq!(
            feedback.tiles(),
            &[Tile::Green, Tile::Yellow, Tile::Gray, Tile::Gray, Tile::Gray]
        );
    }

    #[test]
    fn parse_rejects_bad_patterns() {
        assert!("GYGGYX".parse::<Feedback>().is_err());
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
