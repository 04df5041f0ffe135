//! Full-screen message history.
//!
//! The visible window of the history is server-owned — SCROLL/PAGE commands
//! travel to the server like any other — so this widget just shows what the
//! snapshot carries.
use protocol::GameState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListDirection, ListItem, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let items: Vec<ListItem> = state
        .messages
        .iter()
        .rev()
        .map(|line| ListItem::new(line.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Message Log "),
        )
        .direction(ListDirection::BottomToTop);
    frame.render_widget(list, chunks[0]);

    let hint = Paragraph::new("up/down scroll · pgup/pgdn page · any other key closes")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[1]);
}
