//! Reading view for scrolls, notes, and books.
use protocol::ReadingState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, reading: &ReadingState) {
    let mut lines = vec![Line::from("")];
    lines.extend(reading.lines.iter().map(|line| Line::from(line.clone())));
    lines.push(Line::from(""));
    lines.push(Line::from("enter / esc to stop reading").style(Style::default().fg(Color::DarkGray)));

    let page = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", reading.title)),
    );
    frame.render_widget(page, area);
}
