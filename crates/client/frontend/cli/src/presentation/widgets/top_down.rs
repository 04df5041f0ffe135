//! Top-down canvas backend.
//!
//! Paints the composited frame as colored cells on a braille canvas; entity
//! markers go on top in the frame's paint order.
use client_frontend_core::{SceneFrame, TileFlags};
use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Rectangle},
    },
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, scene: &SceneFrame) {
    let tile = scene.tile_size as f64;
    let width = scene.viewport.width as f64 * tile;
    let height = scene.viewport.height as f64 * tile;
    let rows = scene.viewport.height as i32;

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" Overview "))
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for view_y in 0..rows {
                for view_x in 0..scene.viewport.width as i32 {
                    let Some(cell) = scene.tile(view_x, view_y) else {
                        continue;
                    };
                    if !cell.flags.contains(TileFlags::EXPLORED) {
                        continue;
                    }
                    let color = Theme::lit(Theme::tile_rgb(cell.kind), cell.light);
                    ctx.draw(&Rectangle {
                        // Canvas y grows upward; view y grows downward.
                        x: view_x as f64 * tile,
                        y: (rows - 1 - view_y) as f64 * tile,
                        width: tile,
                        height: tile,
                        color,
                    });
                }
            }

            // Entities are already (z, y, x) sorted; painting in order keeps
            // the frame deterministic.
            for entity in &scene.entities {
                let inset = tile * 0.25;
                ctx.draw(&Rectangle {
                    x: entity.x as f64 * tile + inset,
                    y: (rows - 1 - entity.y) as f64 * tile + inset,
                    width: tile - inset * 2.0,
                    height: tile - inset * 2.0,
                    color: Theme::lit(Theme::entity_rgb(entity), 1.0),
                });
            }
        });

    frame.render_widget(canvas, area);
}
