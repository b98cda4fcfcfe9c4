//! Full-screen terminal interface
//!
//! Same commands as the line shell, with the hints and best choices always
//! on screen.

mod app;
mod rendering;

pub use app::{App, MAX_MESSAGES, Message, MessageStyle, TOP_CHOICES, run_tui};
