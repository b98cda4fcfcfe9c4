//! Vocabulary loading
//!
//! Turns newline-delimited text into `Word`s. Entries that are not five ASCII
//! letters are skipped, so everything past this point can assume well-formed words.

use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Couldn't read vocabulary file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Vocabulary file '{0}' contains no valid 5-letter words")]
    Empty(PathBuf),
}

/// Load words from a file, one per line
///
/// Blank lines are ignored; other invalid entries are skipped with a warning.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::Empty`] if no
/// line holds a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/vocabulary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited text into words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    let mut skipped = 0_usize;
    let words: Vec<Word> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} entries that are not 5-letter words");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
/// use wordle_helper::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_text_trims_and_lowercases() {
        let words = words_from_text("  Crane\n\nslate \r\nab1de\nirate");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_file_round_trip() {
        let path = std::env::temp_dir().join(format!("wordle_helper_{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_file_without_words_is_empty_error() {
        let path =
            std::env::temp_dir().join(format!("wordle_helper_empty_{}.txt", std::process::id()));
        fs::write(&path, "toolong\n\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::Empty(_))));
    }
}
