//! Vocabulary filtering against accumulated hints
//!
//! Each word is checked in three stages, stopping at the first failure:
//!
//! 1. **Green**: every known slot must hold its letter. The matched copy is
//!    consumed so later stages cannot count it again.
//! 2. **Yellow**: the word must contain each yellow letter. Every copy not yet
//!    consumed must sit outside the letter's ruled-out positions, and is then
//!    consumed itself.
//! 3. **Gray**: no gray letter may remain among the unconsumed copies.
//!
//! The consumption order is what lets a letter be green in one slot and gray
//! everywhere else (a word with exactly one `e`, say).

use crate::core::{Constraints, WORD_LEN, Word};

/// Check a single word against the hints
#[must_use]
pub fn matches(word: &Word, constraints: &Constraints) -> bool {
    let mut remaining: [Option<u8>; WORD_LEN] = (*word.chars()).map(Some);

    for (pos, letter) in constraints.green().required() {
        if word.char_at(pos) != letter {
            return false;
        }
        remaining[pos] = None;
    }

    for (letter, forbidden) in constraints.yellow().iter() {
        if !word.has_letter(letter) {
            return false;
        }
        for (pos, slot) in remaining.iter_mut().enumerate() {
            if *slot == Some(letter) {
                if forbidden.contains(&pos) {
                    return false;
                }
                *slot = None;
            }
        }
    }

    let gray = constraints.gray();
    !remaining.iter().flatten().any(|&letter| gray.contains(letter))
}

/// Words of `vocabulary` consistent with every hint, in vocabulary order
///
/// An empty result is valid: contradictory hints simply leave nothing.
pub fn filter<'a>(
    vocabulary: impl IntoIterator<Item = &'a Word>,
    constraints: &Constraints,
) -> Vec<&'a Word> {
    vocabulary
        .into_iter()
        .filter(|word| matches(word, constraints))
        .collect()
}
