//! TUI rendering with ratatui

use super::app::{App, MessageStyle, TOP_CHOICES};
use crate::commands::shell::HELP;
use crate::core::WORD_LEN;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(10),                      // Main content
            Constraint::Length(MAX_MESSAGE_ROWS + 2), // Messages
            Constraint::Length(3),                    // Input
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_constraints(f, app, main_chunks[0]);
    if app.show_help {
        render_help(f, main_chunks[1]);
    } else {
        render_choices(f, app, main_chunks[1]);
    }

    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
}

const MAX_MESSAGE_ROWS: u16 = super::app::MAX_MESSAGES as u16;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE HELPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(panel("").style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn tile(letter: u8, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", char::from(letter).to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session().constraints();

    let green: Vec<Span> = (0..WORD_LEN)
        .flat_map(|pos| {
            let span = match constraints.green().get(pos) {
                Some(letter) => tile(letter, Color::Green),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let mut lines = vec![
        Line::from("Green"),
        Line::from(green),
        Line::from(""),
        Line::from("Yellow (ruled-out positions)"),
    ];

    if constraints.yellow().is_empty() {
        lines.push(Line::from(Span::styled("  none", Style::default().fg(Color::DarkGray))));
    }
    for (letter, positions) in constraints.yellow().iter() {
        let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
        lines.push(Line::from(vec![
            Span::raw("  "),
            tile(letter, Color::Yellow),
            Span::raw(format!(" not at {}", positions.join(", "))),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Gray"));
    let gray = constraints.gray();
    lines.push(if gray.is_empty() {
        Line::from(Span::styled("  none", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(
            gray.iter()
                .map(|letter| {
                    Span::styled(
                        format!(" {}", char::from(letter).to_ascii_uppercase()),
                        Style::default().fg(Color::Gray),
                    )
                })
                .collect::<Vec<_>>(),
        )
    });

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Candidates: {} of {}",
        app.session().candidates().len(),
        app.session().vocabulary_len()
    )));

    let paragraph = Paragraph::new(lines)
        .block(panel(" Hints "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_choices(f: &mut Frame, app: &App, area: Rect) {
    let ranking = app.session().best_choices(TOP_CHOICES);

    let items: Vec<ListItem> = if ranking.is_empty() {
        vec![ListItem::new("No candidates").style(Style::default().fg(Color::Red))]
    } else {
        ranking
            .iter()
            .enumerate()
            .map(|(i, ranked)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:2}. ", i + 1)),
                    Span::styled(ranked.word.text().to_uppercase(), style),
                    Span::styled(
                        format!("  {}", ranked.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(panel(" Best Choices "));
    f.render_widget(list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(HELP)
        .block(panel(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(panel(" Messages "));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(format!("> {}", app.input_buffer))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Command | Enter: run | Esc: quit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Session;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_choices_and_hints() {
        let mut app = App::new(Session::new(words_from_slice(&["crane", "slate", "fuzzy"])));
        app.input_buffer = "setgreen ..a..".to_string();
        app.submit();

        let text = screen(&app);
        assert!(text.contains("Best Choices"));
        assert!(text.contains("CRANE"));
        assert!(text.contains("SLATE"));
        assert!(!text.contains("FUZZY"));
        assert!(text.contains("Candidates: 2 of 3"));
    }

    #[test]
    fn help_replaces_choices() {
        let mut app = App::new(Session::new(words_from_slice(&["crane"])));
        app.input_buffer = "help".to_string();
        app.submit();

        let text = screen(&app);
        assert!(text.contains("Help"));
        assert!(!text.contains("Best Choices"));
    }
}
