//! TUI application state and logic

use crate::commands::shell::{Command, Reply, Shell, parse};
use crate::solver::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
pub const MAX_MESSAGES: usize = 5;

/// Choices shown in the ranking panel
pub const TOP_CHOICES: usize = 10;

/// Application state
pub struct App {
    pub shell: Shell,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            shell: Shell::new(session),
            input_buffer: String::new(),
            messages: Vec::new(),
            show_help: false,
            should_quit: false,
        };
        app.add_message(
            "Type a command and press Enter; 'help' toggles the command list",
            MessageStyle::Info,
        );
        app
    }

    /// Execute the input line and record the reply
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        if line.trim().is_empty() {
            return;
        }
        debug!("tui command: {line}");

        let result = match parse(&line) {
            Ok(Command::Help) => {
                self.show_help = !self.show_help;
                return;
            }
            Ok(command) => self.shell.execute(command),
            Err(err) => Err(err),
        };

        match result {
            Ok(Reply::Exit) => self.should_quit = true,
            Ok(Reply::Text(text)) => self.add_message(&text, MessageStyle::Success),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.shell.session()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
