//! Terminal frontend for the Gloomward client.
//!
//! A pure presentation layer over [`client_frontend_core`]: it owns the
//! terminal resource, translates crossterm key events into the core's input
//! port, and draws composited frames through one of three backends
//! (character grid, top-down canvas, first-person canvas). It talks to the
//! rest of the world only through a [`client_frontend_core::ServerLink`].
pub mod app;
pub mod config;
pub mod event;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, RenderBackend};
