//! Letter frequency counting

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Total occurrences of each letter across a word pool
///
/// Every occurrence counts, including repeats inside one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencies(FxHashMap<u8, u32>);

impl LetterFrequencies {
    /// Count of `letter`, or `None` if it never occurred in the pool
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<u32> {
        self.0.get(&letter).copied()
    }

    /// Number of distinct letters seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Count letter occurrences over `words`
///
/// An empty pool yields an empty table.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::count_frequencies;
///
/// let words = [Word::new("speed").unwrap(), Word::new("erase").unwrap()];
/// let freq = count_frequencies(&words);
/// assert_eq!(freq.get(b'e'), Some(4));
/// assert_eq!(freq.get(b'z'), None);
/// ```
pub fn count_frequencies<'a>(words: impl IntoIterator<Item = &'a Word>) -> LetterFrequencies {
    let mut counts: FxHashMap<u8, u32> = FxHashMap::default();
    for word in words {
        for &letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    LetterFrequencies(counts)
}
