//! Help screen, rendered straight from the binding tables.
use client_frontend_core::{Key, bindings};
use protocol::UiMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from("")];
    for (key, command) in bindings(UiMode::Game) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", key_label(*key)), key_style),
            Span::raw(describe(command.wire())),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  esc always closes the current screen",
        hint,
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help — Keys "),
    );
    frame.render_widget(help, area);
}

fn key_label(key: Key) -> String {
    match key {
        Key::Char(' ') => "space".to_owned(),
        Key::Char(ch) => ch.to_string(),
        Key::Up => "up".to_owned(),
        Key::Down => "down".to_owned(),
        Key::Left => "left".to_owned(),
        Key::Right => "right".to_owned(),
        Key::Enter => "enter".to_owned(),
        Key::Escape => "esc".to_owned(),
        Key::Tab => "tab".to_owned(),
        Key::Backspace => "backspace".to_owned(),
        Key::PageUp => "pgup".to_owned(),
        Key::PageDown => "pgdn".to_owned(),
    }
}

fn describe(wire: &str) -> String {
    wire.to_ascii_lowercase().replace('_', " ")
}
