//! Color and glyph mapping for the terminal UI.
use client_frontend_core::{MessageLevel, SceneEntity, SceneEntityKind, SceneTile, TileFlags};
use protocol::{ConnectionStatus, TileKind};
use ratatui::style::{Color, Modifier, Style};

/// Consistent styling rules for every widget.
pub struct Theme;

impl Theme {
    /// Base RGB for a tile kind, before lighting.
    pub fn tile_rgb(kind: TileKind) -> (u8, u8, u8) {
        match kind {
            TileKind::Wall => (130, 130, 140),
            TileKind::Floor => (90, 80, 70),
            TileKind::Door => (160, 110, 40),
            TileKind::StairsUp | TileKind::StairsDown => (200, 200, 120),
            TileKind::Water => (60, 100, 200),
            TileKind::DeepWater => (30, 50, 140),
            TileKind::Lava => (220, 80, 20),
            TileKind::Ice => (170, 210, 230),
            TileKind::PoisonGas => (110, 170, 60),
        }
    }

    /// Glyph for a tile kind in the grid backend.
    pub fn tile_glyph(kind: TileKind) -> char {
        match kind {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::Door => '+',
            TileKind::StairsUp => '<',
            TileKind::StairsDown => '>',
            TileKind::Water => '~',
            TileKind::DeepWater => '~',
            TileKind::Lava => '^',
            TileKind::Ice => '_',
            TileKind::PoisonGas => '%',
        }
    }

    /// Grid style for a composited tile: base color scaled by its lighting
    /// scalar, cone cells get a lifted background.
    pub fn tile_style(tile: &SceneTile) -> Style {
        if !tile.flags.contains(TileFlags::EXPLORED) {
            // Unexplored cells draw as blank space.
            return Style::default().fg(Color::Reset);
        }

        let mut style = Style::default().fg(Self::lit(Self::tile_rgb(tile.kind), tile.light));
        if tile.flags.contains(TileFlags::CONE) {
            style = style.bg(Color::Rgb(40, 40, 28));
        }
        if !tile.flags.contains(TileFlags::VISIBLE) {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }

    /// Glyph and style for a composited entity.
    pub fn entity_glyph(entity: &SceneEntity) -> (char, Style) {
        match entity.kind {
            SceneEntityKind::Player => (
                '@',
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            SceneEntityKind::Enemy => {
                let mut style = Style::default().fg(Color::LightRed);
                if entity.elite {
                    style = style.add_modifier(Modifier::BOLD).fg(Color::Magenta);
                }
                (entity.symbol, style)
            }
            SceneEntityKind::Item => (entity.symbol, Style::default().fg(Color::LightCyan)),
        }
    }

    /// RGB for an entity in the canvas backends.
    pub fn entity_rgb(entity: &SceneEntity) -> (u8, u8, u8) {
        match entity.kind {
            SceneEntityKind::Player => (240, 220, 60),
            SceneEntityKind::Enemy if entity.elite => (220, 60, 220),
            SceneEntityKind::Enemy => (220, 70, 70),
            SceneEntityKind::Item => (90, 220, 220),
        }
    }

    /// Scales a base color by a [0, 1] lighting scalar.
    pub fn lit((r, g, b): (u8, u8, u8), light: f32) -> Color {
        let light = light.clamp(0.0, 1.0);
        Color::Rgb(
            (r as f32 * light) as u8,
            (g as f32 * light) as u8,
            (b as f32 * light) as u8,
        )
    }

    pub fn message_style(level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::Gray),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    pub fn status_style(status: ConnectionStatus) -> Style {
        match status {
            ConnectionStatus::Connected => Style::default().fg(Color::Green),
            ConnectionStatus::Connecting => Style::default().fg(Color::Yellow),
            ConnectionStatus::Disconnected => Style::default().fg(Color::DarkGray),
            ConnectionStatus::Error => Style::default().fg(Color::Red),
        }
    }
}
