//! A solving session: one vocabulary plus the hints gathered so far

use super::filter::filter;
use super::frequency::{LetterFrequencies, count_frequencies};
use super::ranking::{Ranking, rank};
use crate::core::{Constraints, Feedback, Green, Word};
use log::{debug, info};

/// Owns the vocabulary and the hint state for one game
///
/// The letter frequencies of the full vocabulary are computed once on load and
/// reused for opener suggestions. Mid-game suggestions recount frequencies
/// over the filtered candidate pool.
#[derive(Debug, Clone)]
pub struct Session {
    vocabulary: Vec<Word>,
    baseline: LetterFrequencies,
    constraints: Constraints,
}

impl Session {
    /// Start a new game over `vocabulary`
    #[must_use]
    pub fn new(vocabulary: Vec<Word>) -> Self {
        Self::with_constraints(vocabulary, Constraints::new())
    }

    /// Resume a game whose hints are already known
    #[must_use]
    pub fn with_constraints(vocabulary: Vec<Word>, constraints: Constraints) -> Self {
        let baseline = count_frequencies(&vocabulary);
        info!(
            "session vocabulary: {} words, {} distinct letters",
            vocabulary.len(),
            baseline.len()
        );
        Self {
            vocabulary,
            baseline,
            constraints,
        }
    }

    /// Swap in a new vocabulary; the hints are kept
    pub fn replace_vocabulary(&mut self, vocabulary: Vec<Word>) {
        self.baseline = count_frequencies(&vocabulary);
        self.vocabulary = vocabulary;
        info!("vocabulary replaced: {} words", self.vocabulary.len());
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Frequencies over the whole vocabulary
    #[must_use]
    pub const fn baseline(&self) -> &LetterFrequencies {
        &self.baseline
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Forget every hint ("new game")
    pub fn reset(&mut self) {
        self.constraints.reset();
    }

    pub fn set_green(&mut self, green: Green) {
        self.constraints.set_green(green);
    }

    /// Add ruled-out positions for a yellow letter, unioned with any already known
    pub fn add_yellow(&mut self, letter: u8, positions: impl IntoIterator<Item = usize>) {
        self.constraints.add_yellow(letter, positions);
    }

    /// Remove yellow letters; returns the ones that were not recorded
    pub fn remove_yellow(&mut self, letters: impl IntoIterator<Item = u8>) -> Vec<u8> {
        self.constraints.remove_yellow(letters)
    }

    pub fn add_gray(&mut self, letters: impl IntoIterator<Item = u8>) {
        self.constraints.add_gray(letters);
    }

    /// Remove gray letters; returns the ones that were not recorded
    pub fn remove_gray(&mut self, letters: impl IntoIterator<Item = u8>) -> Vec<u8> {
        self.constraints.remove_gray(letters)
    }

    /// Fold the colouring of a played guess into the hints
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        self.constraints.apply_feedback(guess, feedback);
    }

    /// Vocabulary words still consistent with the hints
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        filter(&self.vocabulary, &self.constraints)
    }

    /// The `k` best guesses among the remaining candidates
    ///
    /// Frequencies are recounted over the candidate pool, so letters that
    /// no longer discriminate (e.g. a known green) weigh the same for everyone.
    #[must_use]
    pub fn best_choices(&self, k: usize) -> Ranking<'_> {
        let candidates = self.candidates();
        let freq = count_frequencies(candidates.iter().copied());
        debug!(
            "ranking {} of {} words (k = {k})",
            candidates.len(),
            self.vocabulary.len()
        );
        rank(candidates, &freq, k)
    }

    /// The `k` best opening guesses, ignoring all hints
    #[must_use]
    pub fn best_openers(&self, k: usize) -> Ranking<'_> {
        debug!("ranking openers over {} words (k = {k})", self.vocabulary.len());
        rank(&self.vocabulary, &self.baseline, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn session(list: &[&str]) -> Session {
        Session::new(words_from_slice(list))
    }

    fn texts(ranking: &Ranking<'_>) -> Vec<String> {
        ranking.words().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn starts_empty() {
        let session = session(&["crane", "slate"]);
        assert!(session.constraints().is_empty());
        assert_eq!(session.vocabulary_len(), 2);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn green_scenario() {
        let mut session = session(&["apple", "angle", "ankle"]);
        session.set_green(".n..e".parse().unwrap());

        let choices = session.best_choices(5);
        let mut words = texts(&choices);
        words.sort();
        assert_eq!(words, ["angle", "ankle"]);
    }

    #[test]
    fn yellow_scenario() {
        let mut session = session(&["stone", "snout", "notes"]);
        session.add_yellow(b's', [0]);
        assert_eq!(texts(&session.best_choices(3)), ["notes"]);
    }

    #[test]
    fn gray_scenario() {
        let mut session = session(&["apple", "melon", "crepe"]);
        session.add_gray(*b"ap");
        assert_eq!(texts(&session.best_choices(3)), ["melon"]);
    }

    #[test]
    fn yellow_positions_union() {
        let mut session = session(&["stone", "notes", "lasso"]);
        session.add_yellow(b's', [0]);
        session.add_yellow(b's', [4]);

        let forbidden: Vec<usize> = session
            .constraints()
            .yellow()
            .forbidden(b's')
            .unwrap()
            .iter()
            .copied()
            .collect();
        assert_eq!(forbidden, [0, 4]);
        assert_eq!(texts(&session.best_choices(3)), ["lasso"]);
    }

    #[test]
    fn removals_continue_past_missing_letters() {
        let mut session = session(&["crane"]);
        session.add_gray(*b"xy");
        session.add_yellow(b'a', [0]);

        assert_eq!(session.remove_gray(*b"qx"), [b'q']);
        assert!(!session.constraints().gray().contains(b'x'));
        assert!(session.constraints().gray().contains(b'y'));

        assert_eq!(session.remove_yellow(*b"za"), [b'z']);
        assert!(session.constraints().yellow().is_empty());
    }

    #[test]
    fn reset_restores_all_candidates() {
        let mut session = session(&["apple", "melon", "crepe"]);
        session.add_gray(*b"ap");
        session.set_green("m....".parse().unwrap());
        assert_eq!(session.candidates().len(), 1);

        session.reset();
        session.reset();
        assert!(session.constraints().is_empty());
        assert_eq!(session.candidates().len(), 3);
    }

    #[test]
    fn no_candidates_is_not_an_error() {
        let mut session = session(&["apple", "melon"]);
        session.set_green("zzzzz".parse().unwrap());
        assert!(session.best_choices(5).is_empty());
    }

    #[test]
    fn openers_use_full_vocabulary() {
        let mut session = session(&["aabbb", "abcde", "fghij"]);
        session.add_gray(*b"abcdefghij");

        // hints are ignored for openers; a=3 b=4, the rest 1 each
        let openers = session.best_openers(2);
        assert_eq!(texts(&openers), ["abcde", "aabbb"]);
        assert!(session.best_choices(2).is_empty());
    }

    #[test]
    fn replace_vocabulary_keeps_hints() {
        let mut session = session(&["apple"]);
        session.add_gray(*b"p");
        session.replace_vocabulary(words_from_slice(&["melon", "crepe", "stone"]));

        assert_eq!(session.vocabulary_len(), 3);
        assert_eq!(session.candidates().len(), 2);
        assert_eq!(session.baseline().get(b'e'), Some(4));
    }

    #[test]
    fn apply_feedback_keeps_answer() {
        let mut session = session(&["abide", "speed", "erase", "eerie", "crane"]);
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("abide").unwrap();
        session.apply_feedback(&guess, &Feedback::calculate(&guess, &answer));

        let remaining: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(remaining, ["abide"]);
    }
}
