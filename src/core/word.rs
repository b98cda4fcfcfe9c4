//! Wordle word representation
//!
//! A `Word` is a validated 5-letter lowercase ASCII word. Validation happens once,
//! at the vocabulary boundary; everything downstream indexes `chars()` freely.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, lowercasing it
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
