//! Yes/no dialog overlay.
use protocol::DialogState;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, dialog: &DialogState) {
    let mut lines = vec![Line::from(Span::styled(
        dialog.prompt.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for detail in &dialog.detail {
        lines.push(Line::from(detail.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Y]es", Style::default().fg(Color::Green)),
        Span::raw("   "),
        Span::styled("[N]o", Style::default().fg(Color::Red)),
    ]));

    let dialog_box = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog_box, area);
}
