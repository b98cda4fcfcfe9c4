//! Command implementations

pub mod benchmark;
pub mod play;
pub mod shell;

pub use benchmark::{BenchmarkResult, GameRecord, play_out, run_benchmark};
pub use play::run_play;
pub use shell::{Command, Reply, Shell, ShellError, parse, run_shell};
