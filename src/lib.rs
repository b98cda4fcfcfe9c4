//! Wordle Helper
//!
//! Narrows a vocabulary with green/yellow/gray hints and ranks the survivors
//! by how common their distinct letters are among the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::Green;
//! use wordle_helper::solver::Session;
//! use wordle_helper::wordlists::loader::words_from_slice;
//!
//! let vocabulary = words_from_slice(&["crane", "slate", "crate", "fuzzy"]);
//! let mut session = Session::new(vocabulary);
//!
//! session.set_green("cra..".parse::<Green>().unwrap());
//! session.add_gray(*b"n");
//!
//! let best = session.best_choices(1);
//! assert_eq!(best.best().unwrap().word.text(), "crate");
//! ```

// Core domain types
pub mod core;

// Filtering, frequency counting and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
