//! Line-oriented command shell
//!
//! Each input line is parsed into a [`Command`] and executed against a
//! [`Session`]. Parsing and execution never touch the terminal, which keeps
//! them usable from both the plain shell loop and the TUI.

use crate::core::{ConstraintError, Green, WORD_LEN};
use crate::solver::{Ranking, Session};
use crate::wordlists::loader::{LoadError, load_from_file};
use colored::Colorize;
use log::debug;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

pub const HELP: &str = "\
Commands:

setvocabfile <path>        load the vocabulary from a file
vocabsize                  number of words in the vocabulary
choices <int>              top <int> guesses for the current hints
openers <int>              top <int> opening guesses, ignoring hints
setgreen <pattern>         set the green pattern, '.' for unknown (e.g. .r..e)
viewgreen                  show the green pattern
addyellow <char> <ints>    add a yellow letter with comma-separated 0-based positions it is not at
removeyellow <chars>       remove comma-separated yellow letter(s)
viewyellow                 show every yellow letter and its ruled-out positions
addgray <chars>            add comma-separated gray letter(s)
removegray <chars>         remove comma-separated gray letter(s)
viewgray                   show the gray letters
newgame                    forget all hints (alias: reset)
exit                       leave the shell (alias: quit)";

/// Required argument count, rendered as "1 argument" / "2 arguments"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity(pub usize);

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.0 == 1 { "" } else { "s" };
        write!(f, "{} argument{suffix}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("'{command}' requires {arity}; 'help' to view")]
    ArgCount { command: String, arity: Arity },
    #[error("Argument 1 must be a single alphabetic character.")]
    Letter,
    #[error("Argument 1 must be a comma-separated sequence of alphabetic characters.")]
    Letters,
    #[error("Argument 2 must be a comma-separated sequence of 0-based integer indices below 5.")]
    Indices,
    #[error("Argument 1 must be an integer quantity")]
    Quantity,
    #[error(transparent)]
    Green(#[from] ConstraintError),
    #[error("Command '{0}' doesn't exist. 'help' to see command list")]
    Unknown(String),
    #[error("Failed to open file.")]
    Load(#[source] LoadError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Exit,
    SetVocabFile(PathBuf),
    VocabSize,
    Choices(usize),
    Openers(usize),
    SetGreen(Green),
    ViewGreen,
    AddYellow { letter: u8, positions: Vec<usize> },
    RemoveYellow(Vec<u8>),
    ViewYellow,
    AddGray(Vec<u8>),
    RemoveGray(Vec<u8>),
    ViewGray,
    Help,
}

/// What the shell has to say after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Parse one input line; runs of whitespace separate the arguments
///
/// # Errors
///
/// Returns the [`ShellError`] describing the first problem with the line.
pub fn parse(line: &str) -> Result<Command, ShellError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let expect = |count: usize| {
        if args.len() == count {
            Ok(())
        } else {
            Err(ShellError::ArgCount {
                command: name.to_string(),
                arity: Arity(count),
            })
        }
    };

    let command = match name {
        "newgame" | "reset" => Command::NewGame,
        "exit" | "quit" => Command::Exit,
        "vocabsize" => Command::VocabSize,
        "viewgreen" => Command::ViewGreen,
        "viewyellow" => Command::ViewYellow,
        "viewgray" => Command::ViewGray,
        "help" => Command::Help,
        "setvocabfile" => {
            expect(1)?;
            Command::SetVocabFile(PathBuf::from(args[0]))
        }
        "choices" => {
            expect(1)?;
            Command::Choices(parse_quantity(args[0])?)
        }
        "openers" => {
            expect(1)?;
            Command::Openers(parse_quantity(args[0])?)
        }
        "setgreen" => {
            expect(1)?;
            Command::SetGreen(args[0].parse()?)
        }
        "addyellow" => {
            expect(2)?;
            let letter = parse_letter(args[0]).ok_or(ShellError::Letter)?;
            let positions = parse_positions(args[1])?;
            Command::AddYellow { letter, positions }
        }
        "removeyellow" => {
            expect(1)?;
            Command::RemoveYellow(parse_letters(args[0])?)
        }
        "addgray" => {
            expect(1)?;
            Command::AddGray(parse_letters(args[0])?)
        }
        "removegray" => {
            expect(1)?;
            Command::RemoveGray(parse_letters(args[0])?)
        }
        other => return Err(ShellError::Unknown(other.to_string())),
    };

    Ok(command)
}

fn parse_quantity(arg: &str) -> Result<usize, ShellError> {
    arg.parse().map_err(|_| ShellError::Quantity)
}

/// A single ASCII letter, lowercased
#[must_use]
pub fn parse_letter(arg: &str) -> Option<u8> {
    match arg.as_bytes() {
        &[letter] if letter.is_ascii_alphabetic() => Some(letter.to_ascii_lowercase()),
        _ => None,
    }
}

/// Comma-separated single letters (`a,p`)
///
/// # Errors
///
/// [`ShellError::Letters`] if any part is not one ASCII letter.
pub fn parse_letters(arg: &str) -> Result<Vec<u8>, ShellError> {
    arg.split(',')
        .map(|part| parse_letter(part).ok_or(ShellError::Letters))
        .collect()
}

/// Comma-separated 0-based positions (`1,3`)
///
/// # Errors
///
/// [`ShellError::Indices`] if any part is not an integer below 5.
pub fn parse_positions(arg: &str) -> Result<Vec<usize>, ShellError> {
    arg.split(',')
        .map(|part| match part.parse::<usize>() {
            Ok(pos) if pos < WORD_LEN => Ok(pos),
            _ => Err(ShellError::Indices),
        })
        .collect()
}

/// "a, b, c"
fn join_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&letter| char::from(letter).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn ranking_reply(ranking: &Ranking<'_>) -> Reply {
    if ranking.is_empty() {
        Reply::text("No candidates")
    } else {
        Reply::Text(ranking.to_string())
    }
}

/// A session driven by text commands
#[derive(Debug, Clone)]
pub struct Shell {
    session: Session,
}

impl Shell {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Parse and execute one line
    ///
    /// # Errors
    ///
    /// Any parse or execution error; the session is left untouched.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, ShellError> {
        let command = parse(line)?;
        self.execute(command)
    }

    /// Run a parsed command against the session
    ///
    /// # Errors
    ///
    /// [`ShellError::Load`] when `setvocabfile` cannot load its file; the old
    /// vocabulary stays in place.
    pub fn execute(&mut self, command: Command) -> Result<Reply, ShellError> {
        let reply = match command {
            Command::NewGame => {
                self.session.reset();
                Reply::text("Done")
            }
            Command::Exit => Reply::Exit,
            Command::SetVocabFile(path) => {
                let words = load_from_file(&path).map_err(|err| {
                    debug!("{err}");
                    ShellError::Load(err)
                })?;
                self.session.replace_vocabulary(words);
                Reply::text("Done")
            }
            Command::VocabSize => Reply::Text(self.session.vocabulary_len().to_string()),
            Command::Choices(k) => ranking_reply(&self.session.best_choices(k)),
            Command::Openers(k) => ranking_reply(&self.session.best_openers(k)),
            Command::SetGreen(green) => {
                self.session.set_green(green);
                Reply::text("Done")
            }
            Command::ViewGreen => Reply::Text(self.session.constraints().green().to_string()),
            Command::AddYellow { letter, positions } => {
                self.session.add_yellow(letter, positions);
                Reply::text("Added")
            }
            Command::RemoveYellow(letters) => {
                let missing = self.session.remove_yellow(letters);
                removal_reply(&missing)
            }
            Command::ViewYellow => Reply::Text(self.session.constraints().yellow().to_string()),
            Command::AddGray(letters) => {
                let gray = self.session.constraints().gray();
                let (present, fresh): (Vec<u8>, Vec<u8>) =
                    letters.into_iter().partition(|&letter| gray.contains(letter));
                self.session.add_gray(fresh);
                if present.is_empty() {
                    Reply::text("Added")
                } else {
                    Reply::Text(format!(
                        "Already had {}. Any others were added.",
                        join_letters(&present)
                    ))
                }
            }
            Command::RemoveGray(letters) => {
                let missing = self.session.remove_gray(letters);
                removal_reply(&missing)
            }
            Command::ViewGray => Reply::Text(self.session.constraints().gray().to_string()),
            Command::Help => Reply::text(HELP),
        };

        Ok(reply)
    }
}

fn removal_reply(missing: &[u8]) -> Reply {
    if missing.is_empty() {
        Reply::text("Removed")
    } else {
        Reply::Text(format!(
            "Couldn't find {}. Any others were removed.",
            join_letters(missing)
        ))
    }
}

/// Read commands from `input` until `exit` or end of input
///
/// Blank lines are ignored. Errors are reported to `output` and the loop
/// carries on.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop early.
pub fn run_shell<R: BufRead, W: Write>(
    shell: &mut Shell,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Enter command or 'help':")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match shell.handle_line(&line) {
            Ok(Reply::Exit) => break,
            Ok(Reply::Text(text)) => writeln!(output, "{text}")?,
            Err(err) => writeln!(output, "{}", err.to_string().red())?,
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn shell() -> Shell {
        let vocabulary = words_from_slice(&["crane", "slate", "abide", "eerie", "fuzzy", "adore"]);
        Shell::new(Session::new(vocabulary))
    }

    fn reply(shell: &mut Shell, line: &str) -> String {
        match shell.handle_line(line) {
            Ok(Reply::Text(text)) => text,
            Ok(Reply::Exit) => "<exit>".to_string(),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn parse_collapses_whitespace() {
        assert_eq!(
            parse("  addyellow   e    1,3 ").unwrap(),
            Command::AddYellow {
                letter: b'e',
                positions: vec![1, 3]
            }
        );
        assert_eq!(parse("choices 3").unwrap(), Command::Choices(3));
        assert_eq!(parse("quit").unwrap(), Command::Exit);
        assert_eq!(parse("reset").unwrap(), Command::NewGame);
    }

    #[test]
    fn parse_errors_have_user_messages() {
        let cases = [
            ("choices", "'choices' requires 1 argument; 'help' to view"),
            ("addyellow e", "'addyellow' requires 2 arguments; 'help' to view"),
            ("choices many", "Argument 1 must be an integer quantity"),
            ("choices -1", "Argument 1 must be an integer quantity"),
            ("addyellow ee 1", "Argument 1 must be a single alphabetic character."),
            (
                "addgray a,bc",
                "Argument 1 must be a comma-separated sequence of alphabetic characters.",
            ),
            (
                "addyellow e 1,7",
                "Argument 2 must be a comma-separated sequence of 0-based integer indices below 5.",
            ),
            ("bogus", "Command 'bogus' doesn't exist. 'help' to see command list"),
            ("Choices 3", "Command 'Choices' doesn't exist. 'help' to see command list"),
        ];

        for (line, message) in cases {
            let err = parse(line).unwrap_err();
            assert_eq!(err.to_string(), message, "line: {line}");
        }
    }

    #[test]
    fn setgreen_rejects_wrong_length() {
        assert!(matches!(
            parse("setgreen .r.."),
            Err(ShellError::Green(ConstraintError::GreenLength(4)))
        ));
    }

    #[test]
    fn green_round_trip() {
        let mut shell = shell();
        assert_eq!(reply(&mut shell, "viewgreen"), ".....");
        assert_eq!(reply(&mut shell, "setgreen .R..e"), "Done");
        assert_eq!(reply(&mut shell, "viewgreen"), ".r..e");
    }

    #[test]
    fn yellow_commands() {
        let mut shell = shell();
        assert_eq!(reply(&mut shell, "addyellow E 1"), "Added");
        assert_eq!(reply(&mut shell, "addyellow e 3"), "Added");
        assert_eq!(reply(&mut shell, "addyellow s 0"), "Added");
        assert_eq!(reply(&mut shell, "viewyellow"), "{e=[1, 3], s=[0]}");

        assert_eq!(
            reply(&mut shell, "removeyellow s,x,y"),
            "Couldn't find x, y. Any others were removed."
        );
        assert_eq!(reply(&mut shell, "removeyellow e"), "Removed");
        assert_eq!(reply(&mut shell, "viewyellow"), "{}");
    }

    #[test]
    fn gray_commands() {
        let mut shell = shell();
        assert_eq!(reply(&mut shell, "viewgray"), "{}");
        assert_eq!(reply(&mut shell, "addgray p,a"), "Added");
        assert_eq!(
            reply(&mut shell, "addgray a,z"),
            "Already had a. Any others were added."
        );
        assert_eq!(reply(&mut shell, "viewgray"), "a, p, z");

        assert_eq!(
            reply(&mut shell, "removegray z,q"),
            "Couldn't find q. Any others were removed."
        );
        assert_eq!(reply(&mut shell, "removegray a"), "Removed");
        assert_eq!(reply(&mut shell, "viewgray"), "p");
    }

    #[test]
    fn choices_follow_hints() {
        let mut shell = shell();
        assert_eq!(reply(&mut shell, "vocabsize"), "6");

        // every word but FUZZY has an E, so FUZZY is the only survivor
        reply(&mut shell, "addgray e");
        assert!(reply(&mut shell, "choices 3").starts_with("{fuzzy="));

        reply(&mut shell, "addgray f");
        assert_eq!(reply(&mut shell, "choices 3"), "No candidates");

        assert_eq!(reply(&mut shell, "newgame"), "Done");
        assert_eq!(reply(&mut shell, "viewgray"), "{}");
        assert_eq!(reply(&mut shell, "choices 0"), "No candidates");
    }

    #[test]
    fn huge_counts_return_the_whole_pool() {
        let mut shell = shell();
        let all = reply(&mut shell, "choices 6");
        assert_eq!(reply(&mut shell, "choices 18446744073709551615"), all);
        assert_eq!(reply(&mut shell, "choices 100000000"), all);
        assert_eq!(
            reply(&mut shell, "openers 18446744073709551615"),
            reply(&mut shell, "openers 6")
        );
    }

    #[test]
    fn openers_ignore_hints() {
        let mut shell = shell();
        let before = reply(&mut shell, "openers 2");
        reply(&mut shell, "addgray a,e");
        assert_eq!(reply(&mut shell, "openers 2"), before);
    }

    #[test]
    fn failed_vocab_load_keeps_old_vocabulary() {
        let mut shell = shell();
        assert_eq!(
            reply(&mut shell, "setvocabfile definitely/not/here.txt"),
            "Failed to open file."
        );
        assert_eq!(shell.session().vocabulary_len(), 6);
    }

    #[test]
    fn setvocabfile_replaces_vocabulary() {
        let path =
            std::env::temp_dir().join(format!("wordle_helper_shell_{}.txt", std::process::id()));
        std::fs::write(&path, "crane\nslate\n").unwrap();

        let mut shell = shell();
        let result = reply(&mut shell, &format!("setvocabfile {}", path.display()));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result, "Done");
        assert_eq!(shell.session().vocabulary_len(), 2);
    }

    #[test]
    fn run_shell_stops_at_exit() {
        colored::control::set_override(false);
        let mut shell = shell();
        let input = Cursor::new("vocabsize\n\nbogus\nexit\nvocabsize\n");
        let mut output = Vec::new();

        run_shell(&mut shell, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Enter command or 'help':\n6\nCommand 'bogus' doesn't exist. 'help' to see command list\n"
        );
    }
}
