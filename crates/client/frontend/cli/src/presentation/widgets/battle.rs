//! Enemy status strip shown while a battle sub-object is populated.
use protocol::BattleState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

pub fn render(frame: &mut Frame, area: Rect, battle: &BattleState) {
    let ratio = if battle.enemy_max_health <= 0 {
        0.0
    } else {
        (battle.enemy_health as f64 / battle.enemy_max_health as f64).clamp(0.0, 1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} {} ", battle.enemy_symbol, battle.enemy_name))
                .border_style(Style::default().fg(Color::Red)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .ratio(ratio)
        .label(format!(
            "{}/{}",
            battle.enemy_health.max(0),
            battle.enemy_max_health
        ));
    frame.render_widget(gauge, area);
}
