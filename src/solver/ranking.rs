//! Candidate ranking by unique-letter frequency
//!
//! A word's score is the sum of the pool frequencies of its *distinct* letters,
//! so words that cover many common letters score highest.

use super::frequency::LetterFrequencies;
use crate::core::{LetterSet, Word};
use std::fmt;

/// A word together with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedWord<'a> {
    pub word: &'a Word,
    pub score: u32,
}

/// Top-ranked words, best first
///
/// Equal scores keep the order in which the selection pass left them. That
/// order follows the scan order of the input pool and the slot each word
/// replaced; it is not alphabetical and not a total order on `(score, word)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking<'a>(Vec<RankedWord<'a>>);

impl<'a> Ranking<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest-scoring entry
    #[must_use]
    pub fn best(&self) -> Option<&RankedWord<'a>> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord<'a>> {
        self.0.iter()
    }

    /// The ranked words without their scores
    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.0.iter().map(|ranked| ranked.word)
    }
}

impl<'r, 'a> IntoIterator for &'r Ranking<'a> {
    type Item = &'r RankedWord<'a>;
    type IntoIter = std::slice::Iter<'r, RankedWord<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Ranking<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, ranked) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", ranked.word, ranked.score)?;
        }
        f.write_str("}")
    }
}

/// Sum of frequencies over the distinct letters of `word`
///
/// # Panics
/// Panics if a letter of `word` is missing from `freq`. That only happens when
/// the table was counted over a different pool than the one being scored.
#[must_use]
pub fn score(word: &Word, freq: &LetterFrequencies) -> u32 {
    let distinct: LetterSet = word.chars().iter().copied().collect();
    distinct
        .iter()
        .map(|letter| {
            freq.get(letter).unwrap_or_else(|| {
                panic!(
                    "letter '{}' of '{word}' missing from the frequency table",
                    char::from(letter)
                )
            })
        })
        .sum()
}

/// Select the `k` best words of `words` in one pass
///
/// Keeps `k` slots (initially empty, score 0). A word enters only if it scores
/// strictly more than the lowest slot, and then replaces the first slot holding
/// that lowest score. Words tying the lowest slot are turned away, so which of
/// several equal words survive depends on scan order.
///
/// Returns at most `k` entries, sorted by descending score. Never holds more
/// slots than there are words, so any `k` is accepted.
pub fn rank<'a>(
    words: impl IntoIterator<Item = &'a Word>,
    freq: &LetterFrequencies,
    k: usize,
) -> Ranking<'a> {
    let words: Vec<&'a Word> = words.into_iter().collect();
    let slot_count = k.min(words.len());
    if slot_count == 0 {
        return Ranking::default();
    }

    let mut slots: Vec<Option<RankedWord<'a>>> = vec![None; slot_count];

    for word in words {
        let score = score(word, freq);

        let (min_idx, min_score) = slots
            .iter()
            .map(|slot| slot.map_or(0, |ranked| ranked.score))
            .enumerate()
            .min_by_key(|&(_, slot_score)| slot_score)
            .unwrap_or((0, 0));

        if score > min_score {
            slots[min_idx] = Some(RankedWord { word, score });
        }
    }

    let mut entries: Vec<RankedWord<'a>> = slots.into_iter().flatten().collect();
    // stable: ties stay in slot order
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    Ranking(entries)
}
