//! Rendering for the tic-tac-toe TUI.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Draws the full frame: title, scoreboard, board, status line.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(2),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let score = app.game().score();
    let scoreboard = Paragraph::new(format!(
        "You {}  |  AI {}  |  Draws {}",
        score.human, score.ai, score.draws
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    f.render_widget(scoreboard, chunks[1]);

    board::render_board(f, chunks[2], app.game());

    let status = Paragraph::new(app.status_message().to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[3]);
}
