//! Message panel: server log lines with client notices merged underneath.
use client_frontend_core::MessageLog;
use protocol::GameState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::Theme;

/// Render recent messages, newest at the bottom.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    notices: &MessageLog,
    panel_height: u16,
) {
    let capacity = panel_height as usize;

    // Newest first: client notices, then the server's lines (shipped oldest
    // first inside the snapshot).
    let mut items: Vec<ListItem> = notices
        .recent(capacity)
        .map(|entry| ListItem::new(entry.text.clone()).style(Theme::message_style(entry.level)))
        .collect();
    let remaining = capacity.saturating_sub(items.len());
    items.extend(
        state
            .messages
            .iter()
            .rev()
            .take(remaining)
            .map(|line| ListItem::new(line.clone()).style(Style::default().fg(Color::Gray))),
    );

    while items.len() < capacity {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
