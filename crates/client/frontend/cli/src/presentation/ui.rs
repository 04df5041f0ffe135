//! Render entry point: routes one frame through the right widgets.
//!
//! Mode routing mirrors the snapshot's `ui_mode`: GAME draws the selected
//! backend, the screen modes replace the game area, DIALOG overlays it.
use std::time::Instant;

use anyhow::Result;
use protocol::{ConnectionStatus, GameState, UiMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{
    FrontendConfig, MessageLog, OccupancyIndex, TransientFeedback, compose,
};

use crate::{
    config::{CliConfig, RenderBackend},
    presentation::{terminal::Tui, theme::Theme, widgets},
};

/// Everything one render pass needs.
pub struct RenderContext<'a> {
    pub state: Option<&'a GameState>,
    pub status: ConnectionStatus,
    pub notices: &'a MessageLog,
    pub feedback: &'a TransientFeedback,
    pub now: Instant,
    pub frontend: &'a FrontendConfig,
    pub cli: &'a CliConfig,
}

/// Draws one complete frame. Never fails on snapshot contents; the only
/// errors out of here are terminal I/O.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        match ctx.state {
            None => widgets::start_screen::render(frame, area, ctx.status),
            Some(state) if state.player.is_none() && state.dungeon.is_none() => {
                widgets::start_screen::render(frame, area, ctx.status);
            }
            Some(state) => render_session(frame, area, ctx, state),
        }
    })?;
    Ok(())
}

fn render_session(frame: &mut Frame, area: Rect, ctx: &RenderContext, state: &GameState) {
    let battle_height = if state.battle.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Header
            Constraint::Min(0),                                     // Game area
            Constraint::Length(battle_height),                      // Battle strip
            Constraint::Length(ctx.cli.message_panel_height + 2),   // Messages
            Constraint::Length(1),                                  // Footer
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], state, ctx.feedback, ctx.now);

    render_game_area(frame, chunks[1], ctx, state);

    if let Some(battle) = &state.battle {
        widgets::battle::render(frame, chunks[2], battle);
    }

    widgets::messages::render(
        frame,
        chunks[3],
        state,
        ctx.notices,
        ctx.cli.message_panel_height,
    );

    render_footer(frame, chunks[4], ctx, state);

    // DIALOG floats above whatever else is on screen.
    if state.ui_mode == UiMode::Dialog {
        if let Some(dialog) = &state.dialog {
            widgets::dialog::render(frame, centered_rect(50, 30, area), dialog);
        }
    }
}

/// The game area: a screen mode replaces it, otherwise the configured
/// backend draws the composited scene.
fn render_game_area(frame: &mut Frame, area: Rect, ctx: &RenderContext, state: &GameState) {
    match state.ui_mode {
        UiMode::Inventory => {
            if let Some(inventory) = &state.inventory {
                widgets::inventory::render(frame, area, inventory);
                return;
            }
        }
        UiMode::MessageLog => {
            widgets::message_log::render(frame, area, state);
            return;
        }
        UiMode::Character => {
            widgets::character::render(frame, area, state);
            return;
        }
        UiMode::Help => {
            widgets::help::render(frame, area);
            return;
        }
        UiMode::Reading => {
            if let Some(reading) = &state.reading {
                widgets::reading::render(frame, area, reading);
                return;
            }
        }
        UiMode::Game | UiMode::Dialog => {}
    }

    let Some(scene) = compose(state, &ctx.frontend.compose_params()) else {
        // Player or dungeon missing mid-session: placeholder, never a crash.
        render_loading(frame, area);
        return;
    };

    match ctx.cli.backend {
        RenderBackend::Grid => {
            let occupancy = OccupancyIndex::build(state, &scene.viewport);
            let depth = state.dungeon.as_ref().map_or(0, |dungeon| dungeon.level);
            widgets::grid_map::render(frame, area, &scene, &occupancy, depth);
        }
        RenderBackend::TopDown => widgets::top_down::render(frame, area, &scene),
        RenderBackend::FirstPerson => widgets::first_person::render(
            frame,
            area,
            &scene,
            ctx.cli.first_person_depth,
            ctx.cli.first_person_half_width,
        ),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

fn render_footer(frame: &mut Frame, area: Rect, ctx: &RenderContext, state: &GameState) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(format!(" [{}] ", ctx.status), Theme::status_style(ctx.status)),
        Span::styled(
            format!("mode: {} · ? help · esc close", state.ui_mode),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, area);
}

/// Centered sub-rectangle, sized as percentages of the parent.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
