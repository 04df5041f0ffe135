//! Header strip: health and experience bars plus run stats.
use std::time::Instant;

use client_frontend_core::{FeedbackKind, TransientFeedback};
use protocol::GameState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    feedback: &TransientFeedback,
    now: Instant,
) {
    let Some(player) = state.player.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Health
            Constraint::Percentage(30), // Experience
            Constraint::Min(0),         // Run stats
        ])
        .split(area);

    let hp_block = Block::default()
        .borders(Borders::ALL)
        .title(" HP ")
        .border_style(health_border(feedback, now));
    let hp = Gauge::default()
        .block(hp_block)
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(fill_ratio(player.health, player.max_health))
        .label(format!("{}/{}", player.health.max(0), player.max_health));
    frame.render_widget(hp, chunks[0]);

    let xp_title = if feedback.is_active(FeedbackKind::LevelUp, now) {
        " XP — LEVEL UP! "
    } else {
        " XP "
    };
    let xp = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(xp_title))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(fill_ratio(player.xp as i32, player.xp_to_level as i32))
        .label(format!("{}/{}", player.xp, player.xp_to_level));
    frame.render_widget(xp, chunks[1]);

    let depth = state.dungeon.as_ref().map_or(0, |dungeon| dungeon.level);
    let stats = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Lv {} ", player.level),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("Depth {depth}  ")),
        Span::raw(format!("Atk {}  Def {}  ", player.attack, player.defense)),
        Span::raw(format!("Kills {}  ", player.kills)),
        Span::styled(
            format!("Turn {}", state.turn),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats, chunks[2]);
}

/// Bar fill as a ratio clamped to [0, 1]; out-of-order snapshots can ship
/// transients above the maximum or below zero and the bar must not care.
fn fill_ratio(current: i32, maximum: i32) -> f64 {
    if maximum <= 0 {
        return 0.0;
    }
    (current as f64 / maximum as f64).clamp(0.0, 1.0)
}

fn health_border(feedback: &TransientFeedback, now: Instant) -> Style {
    if feedback.is_active(FeedbackKind::Damage, now) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if feedback.is_active(FeedbackKind::Healing, now) {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}
