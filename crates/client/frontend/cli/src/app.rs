//! Glue tying the transport link and the terminal UI together.
use anyhow::{Context, Result};

use client_frontend_core::{FrontendConfig, ServerLink};

use crate::{
    config::CliConfig,
    event::EventLoop,
    presentation::terminal::{self, TerminalGuard},
};

/// The terminal frontend. Owns nothing but configuration until [`run`]
/// mounts the view.
///
/// [`run`]: CliFrontend::run
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    /// Mounts the terminal, runs the event loop until teardown, restores the
    /// terminal. The guard restores on panics too.
    pub async fn run(self, link: ServerLink) -> Result<()> {
        let mut tui = terminal::init().context("terminal setup")?;
        let _guard = TerminalGuard;

        tracing::info!(backend = ?self.cli_config.backend, "frontend mounted");

        EventLoop::new(link, self.frontend_config, self.cli_config)
            .run(&mut tui)
            .await
    }
}
