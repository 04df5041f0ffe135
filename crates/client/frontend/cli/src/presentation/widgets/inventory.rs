//! Inventory screen.
use protocol::InventoryState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, inventory: &InventoryState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let items: Vec<ListItem> = if inventory.entries.is_empty() {
        vec![ListItem::new("  (nothing carried)").style(Style::default().fg(Color::DarkGray))]
    } else {
        inventory
            .entries
            .iter()
            .map(|entry| {
                let mut label = entry.name.clone();
                if entry.count > 1 {
                    label.push_str(&format!(" x{}", entry.count));
                }
                let mut tags = Vec::new();
                if entry.usable {
                    tags.push("use");
                }
                if entry.readable {
                    tags.push("read");
                }
                if !tags.is_empty() {
                    label.push_str(&format!("  [{}]", tags.join("/")));
                }
                ListItem::new(label)
            })
            .collect()
    };

    // Selection is server-owned; clamp it so a stale snapshot cannot point
    // past the end of the list.
    let selected = inventory
        .selected
        .min(inventory.entries.len().saturating_sub(1));
    let mut list_state = ListState::default();
    if !inventory.entries.is_empty() {
        list_state.select(Some(selected));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Inventory "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let hint = Paragraph::new(Line::from(
        "up/down select · enter/u use · d drop · r read · i/q/esc close",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[1]);
}
