//! Core domain types for Wordle
//!
//! Words, letter sets, feedback colouring and the accumulated hint state.
//! Everything here is pure data with no I/O.

mod constraints;
mod feedback;
mod game;
mod letters;
mod word;

pub use constraints::{ConstraintError, Constraints, Green, UNKNOWN, Yellow};
pub use feedback::{Feedback, FeedbackError, Tile};
pub use game::{Game, GameError, GameState, GuessOutcome, MAX_GUESSES};
pub use letters::LetterSet;
pub use word::{WORD_LEN, Word, WordError};
