//! Character sheet screen.
use protocol::GameState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let Some(player) = state.player.as_ref() else {
        return;
    };
    let depth = state.dungeon.as_ref().map_or(0, |dungeon| dungeon.level);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().add_modifier(Modifier::BOLD);

    let row = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<14}"), label),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        Line::from(""),
        row("Level", player.level.to_string()),
        row(
            "Experience",
            format!("{} / {}", player.xp, player.xp_to_level),
        ),
        Line::from(""),
        row(
            "Health",
            format!("{} / {}", player.health.max(0), player.max_health),
        ),
        row("Attack", player.attack.to_string()),
        row("Defense", player.defense.to_string()),
        Line::from(""),
        row("Kills", player.kills.to_string()),
        row("Depth", depth.to_string()),
        row("Turn", state.turn.to_string()),
        Line::from(""),
        Line::from(Span::styled("c / enter / esc to close", label)),
    ];

    let sheet = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Character "),
    );
    frame.render_widget(sheet, area);
}
