//! Event loop orchestrating snapshots, user input, and rendering.
use std::{sync::Arc, time::Instant};

use anyhow::Result;
use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, MissedTickBehavior},
};

use protocol::{ConnectionStatus, GameState};

use client_frontend_core::{
    Dispatch, FrontendConfig, InputContext, MessageLog, ServerLink, TransientFeedback, dispatch,
};

use crate::{
    config::CliConfig,
    input::{KeyInput, translate_key},
    presentation::{terminal::Tui, ui, ui::RenderContext},
};

/// Owns everything that survives across frames: the latest snapshot, the
/// feedback baseline, and the client notice log.
pub struct EventLoop {
    link: ServerLink,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    latest: Option<Arc<GameState>>,
    status: ConnectionStatus,
    feedback: TransientFeedback,
    /// Whether a flash was live at the last tick, to repaint exactly once
    /// when it expires.
    flash_live: bool,
    notices: MessageLog,
}

impl EventLoop {
    pub fn new(link: ServerLink, frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        let feedback = TransientFeedback::new(frontend_config.flash_duration);
        let notices = MessageLog::new(frontend_config.message_capacity);
        Self {
            link,
            frontend_config,
            cli_config,
            latest: None,
            status: ConnectionStatus::Connecting,
            feedback,
            flash_live: false,
            notices,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut states = self.link.subscribe();
        let mut status = self.link.status();
        self.status = *status.borrow();

        let mut keys = EventStream::new();
        let mut tick = time::interval(self.cli_config.frame_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.render(terminal)?;

        loop {
            tokio::select! {
                result = states.recv() => match result {
                    Ok(state) => {
                        self.on_state(state);
                        self.render(terminal)?;
                    }
                    Err(RecvError::Lagged(dropped)) => {
                        // Whole snapshots; skipping straight to the newest
                        // one is safe.
                        tracing::warn!(dropped, "snapshot subscriber lagged");
                    }
                    Err(RecvError::Closed) => {
                        tracing::info!("state channel closed, shutting down");
                        break;
                    }
                },
                changed = status.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.on_status(*status.borrow());
                    self.render(terminal)?;
                }
                maybe_event = keys.next() => match maybe_event {
                    Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        if self.on_key(key)? {
                            break;
                        }
                        self.render(terminal)?;
                    }
                    Some(Ok(TermEvent::Resize(_, _))) => self.render(terminal)?,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                _ = tick.tick() => {
                    if self.expire_feedback() {
                        self.render(terminal)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn on_state(&mut self, state: Arc<GameState>) {
        let now = Instant::now();
        self.feedback.observe(&state, now);
        self.flash_live = self.feedback.active_kinds(now).next().is_some();

        let had_session = self.latest.as_ref().is_some_and(|prev| prev.has_session());
        if !had_session && state.has_session() {
            self.notices.info("You descend into the gloom.", Some(state.turn));
        }
        if had_session && !state.has_session() {
            self.notices.info("The run is over.", Some(state.turn));
        }

        self.latest = Some(state);
    }

    fn on_status(&mut self, status: ConnectionStatus) {
        if status != self.status {
            tracing::info!(%status, "connection status changed");
            let turn = self.turn();
            match status {
                ConnectionStatus::Disconnected => self.notices.warning("Connection lost.", turn),
                ConnectionStatus::Error => self.notices.warning("Connection error.", turn),
                ConnectionStatus::Connected => self.notices.info("Connected.", turn),
                ConnectionStatus::Connecting => {}
            }
        }
        self.status = status;
    }

    /// Returns `true` when the loop should exit.
    fn on_key(&mut self, key: KeyEvent) -> Result<bool> {
        let key = match translate_key(key) {
            KeyInput::Dispatch(key) => key,
            KeyInput::ForceQuit => return Ok(true),
            KeyInput::None => return Ok(false),
        };

        let ctx = InputContext {
            mode: self.latest.as_ref().map(|state| state.ui_mode).unwrap_or_default(),
            has_session: self.latest.as_ref().is_some_and(|state| state.has_session()),
            is_spectator: self.cli_config.spectator,
            is_connected: self.status.is_live(),
        };

        match dispatch(key, ctx) {
            Dispatch::Forward(command) => {
                tracing::debug!(command = command.wire(), "forwarding");
                self.link.send(command)?;
                Ok(false)
            }
            Dispatch::StartSession => {
                let turn = self.turn();
                self.notices.info("Starting a new game...", turn);
                self.link.new_game()?;
                Ok(false)
            }
            Dispatch::EndSession => {
                tracing::info!("session teardown requested, quitting");
                Ok(true)
            }
            Dispatch::Ignored => Ok(false),
        }
    }

    /// Prunes expired flashes; `true` exactly when the last live flash went
    /// out and the screen needs one more repaint.
    fn expire_feedback(&mut self) -> bool {
        let now = Instant::now();
        self.feedback.prune(now);
        let live = self.feedback.active_kinds(now).next().is_some();
        let expired = self.flash_live && !live;
        self.flash_live = live;
        expired
    }

    fn turn(&self) -> Option<u64> {
        self.latest.as_ref().map(|state| state.turn)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            state: self.latest.as_deref(),
            status: self.status,
            notices: &self.notices,
            feedback: &self.feedback,
            now: Instant::now(),
            frontend: &self.frontend_config,
            cli: &self.cli_config,
        };
        ui::render(terminal, &ctx)
    }
}
