//! Title screen shown while no session exists.
use protocol::ConnectionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

const TITLE: &[&str] = &[
    r"  ___ _    ___   ___  __  ____      ___   ___ ___  ",
    r" / __| |  / _ \ / _ \|  \/  \ \    / /_\ | _ \   \ ",
    r"| (_ | |_| (_) | (_) | |\/| |\ \/\/ / _ \|   / |) |",
    r" \___|____\___/ \___/|_|  |_| \_/\_/_/ \_\_|_\___/ ",
];

pub fn render(frame: &mut Frame, area: Rect, status: ConnectionStatus) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(TITLE.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let title_lines: Vec<Line> = TITLE
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(title_lines).alignment(Alignment::Center),
        chunks[1],
    );

    let prompt = match status {
        ConnectionStatus::Connected => Line::from(vec![
            Span::raw("press "),
            Span::styled("any key", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to start — "),
            Span::styled("Q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" quits"),
        ]),
        ConnectionStatus::Connecting => Line::from("connecting to the server..."),
        ConnectionStatus::Disconnected => Line::from("disconnected — waiting for the server"),
        ConnectionStatus::Error => Line::from("connection error — check the log file"),
    };
    let status_line = Line::from(Span::styled(
        format!("[{status}]"),
        Theme::status_style(status),
    ));

    frame.render_widget(
        Paragraph::new(vec![prompt, status_line]).alignment(Alignment::Center),
        chunks[2],
    );
}
