//! Character-grid backend: one styled glyph per view cell.
use client_frontend_core::{OccupancyIndex, Occupant, SceneFrame, TileFlags};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render the dungeon window, resolving cell occupancy by priority:
/// player > enemy > item > terrain.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    scene: &SceneFrame,
    occupancy: &OccupancyIndex,
    depth: u32,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Depth {depth} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = scene.viewport.height.min(inner.height as u32) as i32;
    let columns = scene.viewport.width.min(inner.width as u32) as i32;

    let mut lines = Vec::with_capacity(rows as usize);
    for view_y in 0..rows {
        let mut spans = Vec::with_capacity(columns as usize);
        for view_x in 0..columns {
            let Some(tile) = scene.tile(view_x, view_y) else {
                spans.push(Span::raw(" "));
                continue;
            };

            let rendered_visible = tile.flags.contains(TileFlags::VISIBLE)
                && tile.flags.contains(TileFlags::EXPLORED);

            let (glyph, style) = match occupancy.get(view_x, view_y) {
                Some(occupant) if rendered_visible => occupant_glyph(occupant),
                _ if !tile.flags.contains(TileFlags::EXPLORED) => {
                    (' ', Style::default())
                }
                _ => (Theme::tile_glyph(tile.kind), Theme::tile_style(tile)),
            };

            // Keep the cone emphasis under entity glyphs too.
            let style = if rendered_visible && tile.flags.contains(TileFlags::CONE) {
                style.bg(Color::Rgb(40, 40, 28))
            } else {
                style
            };

            spans.push(Span::styled(glyph.to_string(), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn occupant_glyph(occupant: &Occupant) -> (char, Style) {
    match occupant {
        Occupant::Player => (
            '@',
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Occupant::Enemy(enemy) => {
            let style = if enemy.elite {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::LightRed)
            };
            (enemy.symbol, style)
        }
        Occupant::Item(item) => (item.symbol, Style::default().fg(Color::LightCyan)),
    }
}
