//! Word lists for the helper
//!
//! `VOCABULARY` holds every guessable word; `ANSWERS` is the subset the game
//! draws hidden words from. Both are embedded at build time from `data/`.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VOCABULARY, VOCABULARY_COUNT};
