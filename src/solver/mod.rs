//! Hint filtering and guess ranking
//!
//! Flow for a mid-game suggestion:
//! filter the vocabulary → count letter frequencies over the survivors → rank.

mod filter;
mod frequency;
mod ranking;
mod session;

pub use filter::{filter, matches};
pub use frequency::{LetterFrequencies, count_frequencies};
pub use ranking::{RankedWord, Ranking, rank, score};
pub use session::Session;
