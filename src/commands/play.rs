//! Play mode
//!
//! A plain-text Wordle game: type guesses, get coloured tiles back.

use crate::core::{Game, GameState, Word};
use crate::output::formatters::{alphabet, board, feedback_to_emoji, ranking_lines};
use crate::solver::Session;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play rounds until `stop`/`exit` or end of input
///
/// `next`, `new` or `skip` gives up the current round. With `assist` set,
/// the top suggestions for the hints so far are shown after every guess.
///
/// # Errors
///
/// Returns an error only on I/O failure.
pub fn run_play<G, R, W>(
    vocabulary: &[Word],
    answers: &[Word],
    assist: Option<usize>,
    rng: &mut G,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    'round: loop {
        let Some(mut game) = Game::random(answers, vocabulary, rng) else {
            writeln!(output, "No answer words to play.")?;
            return Ok(());
        };
        let mut helper = assist.map(|_| Session::new(vocabulary.to_vec()));
        debug!("new round over {} words", vocabulary.len());
        writeln!(output, "Guess!")?;

        loop {
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?.trim().to_lowercase();

            match line.as_str() {
                "stop" | "exit" => return Ok(()),
                "next" | "new" | "skip" => {
                    writeln!(output, "The answer was: {}", game.answer())?;
                    continue 'round;
                }
                _ => {}
            }

            let outcome = match game.guess(&line) {
                Ok(outcome) => outcome,
                Err(err) => {
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            for row in board(&game) {
                writeln!(output, "{row}")?;
            }
            writeln!(output, "{}", alphabet(&game))?;

            if outcome.state != GameState::InProgress {
                for (_, feedback) in game.guesses() {
                    writeln!(output, "{}", feedback_to_emoji(feedback))?;
                }
            }

            match outcome.state {
                GameState::Won => {
                    writeln!(output, "Nice! That took {} tries!", game.guesses().len())?;
                    continue 'round;
                }
                GameState::Lost => {
                    writeln!(output, "The answer was: {}", game.answer())?;
                    continue 'round;
                }
                GameState::InProgress => {
                    let left = game.remaining_guesses();
                    let noun = if left == 1 { "guess" } else { "guesses" };
                    writeln!(output, "{left} {noun} left")?;
                }
            }

            if let (Some(count), Some(session)) = (assist, helper.as_mut()) {
                if let Some((guess, feedback)) = game.guesses().last() {
                    session.apply_feedback(guess, feedback);
                }
                let ranking = session.best_choices(count);
                writeln!(output, "Suggestions ({} candidates):", session.candidates().len())?;
                for line in ranking_lines(&ranking) {
                    writeln!(output, "{line}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(input: &str, assist: Option<usize>) -> String {
        colored::control::set_override(false);
        let vocabulary = words_from_slice(&["crane", "slate", "fuzzy", "craze"]);
        let answers = words_from_slice(&["crane"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = Vec::new();

        run_play(
            &vocabulary,
            &answers,
            assist,
            &mut rng,
            Cursor::new(input.to_string()),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn win_reports_tries() {
        let output = play("slate\nCRANE\nstop\nslate\n", None);

        assert!(output.starts_with("Guess!\n"));
        assert!(output.contains("slate\n-----\n"));
        assert!(output.contains("slate\ncrane\n-----\n"));
        assert!(output.contains("Nice! That took 2 tries!\n"));
        assert!(output.contains("⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩\nNice!"));
        // a fresh round starts after the win, then `stop` ends the loop
        assert!(output.ends_with("Guess!\n"));
    }

    #[test]
    fn counts_down_remaining_guesses() {
        let output = play("fuzzy\nslate\nstop\n", None);

        assert!(output.contains("5 guesses left\n"));
        assert!(output.contains("4 guesses left\n"));
        assert!(!output.contains("6 guesses left"));
    }

    #[test]
    fn invalid_guesses_are_rejected() {
        let output = play("cran\nzzzzz\nexit\n", None);

        assert!(output.contains("Must be 5 letters!\n"));
        assert!(output.contains("Not in the vocabulary!\n"));
        assert!(!output.contains("-----"));
    }

    #[test]
    fn skip_reveals_answer() {
        let output = play("fuzzy\nskip\n", None);
        assert!(output.contains("The answer was: crane\n"));
    }

    #[test]
    fn six_misses_lose() {
        let output = play(&"fuzzy\n".repeat(6), None);

        assert!(output.contains("The answer was: crane\n"));
        assert!(output.contains("1 guess left\n"));
        assert!(!output.contains("Nice!"));
    }

    #[test]
    fn assist_suggests_remaining_candidates() {
        // SLATE vs CRANE leaves CRANE and CRAZE; FUZZY is ruled out
        let output = play("slate\nstop\n", Some(3));

        assert!(output.contains("Suggestions (2 candidates):"));
        assert!(output.contains("CRANE"));
        assert!(output.contains("CRAZE"));
        assert!(!output.contains("FUZZY"));
    }

    #[test]
    fn no_answers_ends_immediately() {
        let vocabulary = words_from_slice(&["crane"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = Vec::new();

        run_play(&vocabulary, &[], None, &mut rng, Cursor::new(""), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No answer words to play.\n");
    }
}
