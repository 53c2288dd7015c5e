//! TUI rendering with ratatui
//!
//! Board, palette picker, and status panels for the Mastermind interface.

use super::app::{App, MessageStyle};
use crate::core::{Code, Color as PegColor, Feedback};
use crate::game::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Terminal color for a peg
#[must_use]
pub const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::Blue,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
        PegColor::Purple => Color::Magenta,
        PegColor::Orange => Color::Rgb(255, 165, 0),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = app.config.max_attempts() as u16 + 5;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Main content
            Constraint::Length(3),         // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Palette and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn peg_span(color: Option<PegColor>) -> Span<'static> {
    match color {
        Some(c) => Span::styled("● ", Style::default().fg(peg_color(c))),
        None => Span::styled("○ ", Style::default().fg(Color::DarkGray)),
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.colors().iter().map(|&c| peg_span(Some(c))).collect()
}

fn feedback_spans(feedback: Feedback, code_length: usize) -> Vec<Span<'static>> {
    vec![
        Span::raw("  "),
        Span::styled(
            "●".repeat(feedback.exact()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("○".repeat(feedback.color_only()), Style::default().fg(Color::White)),
        Span::styled(
            "·".repeat(feedback.misses(code_length)),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let code_length = app.config.code_length();
    let game = &app.game;

    // Secret row: hidden until the game ends
    let mut secret_line = vec![Span::raw("Code  ")];
    match game.revealed_secret() {
        Some(secret) => secret_line.extend(code_spans(secret)),
        None => secret_line.extend(
            (0..code_length).map(|_| Span::styled("? ", Style::default().fg(Color::DarkGray))),
        ),
    }

    let mut lines = vec![Line::from(secret_line), Line::from("")];

    for row in 0..app.config.max_attempts() {
        let mut spans = vec![Span::styled(
            format!("{:>2}.  ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(attempt) = game.attempts().get(row) {
            spans.extend(code_spans(&attempt.guess));
            spans.extend(feedback_spans(attempt.feedback, code_length));
        } else if row == game.attempts().len() && game.outcome() == Outcome::InProgress {
            for (i, &peg) in app.draft.iter().enumerate() {
                let mut span = peg_span(peg);
                if i == app.cursor {
                    span = span.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                spans.push(span);
            }
            spans.push(Span::styled("  ◀", Style::default().fg(Color::Yellow)));
        } else {
            spans.extend((0..code_length).map(|_| Span::styled("· ", Style::default().fg(Color::DarkGray))));
        }

        lines.push(Line::from(spans));
    }

    let title = format!(" Board ({} attempts left) ", game.remaining_attempts());
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Palette
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .config
        .palette()
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Line::from(vec![
                Span::raw(format!(" {} / {}  ", i + 1, c.initial())),
                Span::styled("●", Style::default().fg(peg_color(c))),
                Span::raw(format!(" {}", c.name())),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(" ● right color, right spot"));
    lines.push(Line::from(" ○ right color, wrong spot"));

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL),
    );
    f.render_widget(palette, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(area);

    let outcome = match app.game.outcome() {
        Outcome::InProgress => Span::raw("Playing"),
        Outcome::Won => Span::styled("Won", Style::default().fg(Color::Green)),
        Outcome::Lost => Span::styled("Lost", Style::default().fg(Color::Red)),
    };
    let mode = Paragraph::new(Line::from(vec![Span::raw("Game: "), outcome]))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.outcome().is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "←/→: Move | ↑/↓: Color | Enter: Check | n: New | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
