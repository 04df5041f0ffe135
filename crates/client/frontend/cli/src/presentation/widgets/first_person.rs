//! First-person canvas backend.
//!
//! Sweeps the world ahead of the player far-to-near, projecting solid cells
//! into shaded wall slabs. Depth-fade and fog keep distant geometry dim but
//! never fully black.
use client_frontend_core::{
    SceneFrame, TileFlags,
    projection::{ProjectionParams, depth_fade, depth_sweep, fog_amount, project},
};
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line as CanvasLine, Rectangle},
    },
};

use crate::presentation::theme::Theme;

/// Logical canvas resolution the projection works in.
const CANVAS_W: f64 = 320.0;
const CANVAS_H: f64 = 200.0;

const FOG_RGB: (u8, u8, u8) = (24, 26, 34);

pub fn render(frame: &mut Frame, area: Rect, scene: &SceneFrame, max_depth: i32, half_width: i32) {
    let params = ProjectionParams::default();
    let (player_x, player_y) = scene.viewport.to_world(scene.player.0, scene.player.1);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" View "))
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_W])
        .y_bounds([0.0, CANVAS_H])
        .paint(|ctx| {
            // Horizon, faint.
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: CANVAS_H / 2.0,
                x2: CANVAS_W,
                y2: CANVAS_H / 2.0,
                color: Color::Rgb(40, 42, 50),
            });

            for cell in depth_sweep(player_x, player_y, scene.facing, max_depth, half_width) {
                let Some((view_x, view_y)) = scene.viewport.to_view(cell.world_x, cell.world_y)
                else {
                    continue;
                };
                let Some(tile) = scene.tile(view_x, view_y) else {
                    continue;
                };
                if !tile.flags.contains(TileFlags::EXPLORED) || !tile.kind.is_solid() {
                    continue;
                }

                // Wall face sits half a tile nearer than the cell center.
                let face_depth = cell.depth as f32 - 0.5;
                let left = project(
                    CANVAS_W as f32,
                    CANVAS_H as f32,
                    face_depth,
                    cell.offset as f32 - 0.5,
                    &params,
                );
                let right = project(
                    CANVAS_W as f32,
                    CANVAS_H as f32,
                    face_depth,
                    cell.offset as f32 + 0.5,
                    &params,
                );

                let brightness = depth_fade(face_depth) * tile.light;
                let color = foggy(Theme::tile_rgb(tile.kind), brightness, fog_amount(face_depth));

                ctx.draw(&Rectangle {
                    x: left.screen_x as f64,
                    // Canvas y grows upward; projection y grows downward.
                    y: CANVAS_H - left.wall_bottom as f64,
                    width: (right.screen_x - left.screen_x) as f64,
                    height: (left.wall_bottom - left.wall_top) as f64,
                    color,
                });
            }

            // Visible entities ahead of the camera, nearest drawn last.
            let lateral = scene.facing.perpendicular();
            let mut ahead: Vec<_> = scene
                .entities
                .iter()
                .filter_map(|entity| {
                    let (world_x, world_y) = scene.viewport.to_world(entity.x, entity.y);
                    let rel = (world_x - player_x, world_y - player_y);
                    let depth = rel.0 * scene.facing.dx + rel.1 * scene.facing.dy;
                    let offset = rel.0 * lateral.dx + rel.1 * lateral.dy;
                    (depth >= 1 && depth <= max_depth && offset.abs() <= half_width)
                        .then_some((depth, offset, entity))
                })
                .collect();
            ahead.sort_by_key(|(depth, ..)| std::cmp::Reverse(*depth));

            for (depth, offset, entity) in ahead {
                let projection = project(
                    CANVAS_W as f32,
                    CANVAS_H as f32,
                    depth as f32,
                    offset as f32,
                    &params,
                );
                let size = (projection.scale * params.tile_size * 0.6) as f64;
                let brightness = depth_fade(depth as f32);
                ctx.draw(&Rectangle {
                    x: projection.screen_x as f64 - size / 2.0,
                    y: CANVAS_H - projection.wall_bottom as f64,
                    width: size,
                    height: size,
                    color: foggy(Theme::entity_rgb(entity), brightness, fog_amount(depth as f32)),
                });
            }
        });

    frame.render_widget(canvas, area);
}

/// Scales a base color by brightness, then blends it toward the fog color.
fn foggy((r, g, b): (u8, u8, u8), brightness: f32, fog: f32) -> Color {
    let brightness = brightness.clamp(0.0, 1.0);
    let fog = fog.clamp(0.0, 1.0);
    let mix = |channel: u8, fog_channel: u8| -> u8 {
        let lit = channel as f32 * brightness;
        (lit + (fog_channel as f32 - lit) * fog) as u8
    };
    Color::Rgb(mix(r, FOG_RGB.0), mix(g, FOG_RGB.1), mix(b, FOG_RGB.2))
}
