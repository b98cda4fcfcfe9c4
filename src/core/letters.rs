//! Compact letter sets
//!
//! Letters are lowercase ASCII bytes (`b'a'..=b'z'`); a set is a 26-bit mask.

use std::fmt;

/// A set of lowercase letters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letters must be in [a-z]");
        1 << (letter - b'a')
    }

    /// Test if a letter is contained in this set
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Add a letter, returns `false` if it was already present
    pub fn insert(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 |= Self::bit(letter);
        !present
    }

    /// Remove a letter, returns `false` if it was not present
    pub fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !Self::bit(letter);
        present
    }

    /// Number of letters in the set
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true iff the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
