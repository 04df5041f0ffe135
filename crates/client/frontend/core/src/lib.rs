//! Backend-agnostic presentation core for the Gloomward client.
//!
//! Turns server-pushed [`protocol::GameState`] snapshots into a
//! [`scene::SceneFrame`] any rendering backend can consume, and raw key
//! events into semantic commands. Everything scene-side is a pure function of
//! the snapshot; the only state that survives a frame is the transient
//! feedback baseline and the client-side message log.
pub mod compositor;
pub mod config;
pub mod dispatch;
pub mod effects;
pub mod fov;
pub mod keymap;
pub mod link;
pub mod message;
pub mod projection;
pub mod scene;
pub mod viewport;

pub use compositor::{ComposeParams, OccupancyIndex, Occupant, compose};
pub use config::FrontendConfig;
pub use dispatch::{Dispatch, InputContext, dispatch};
pub use effects::{FeedbackKind, PlayerBaseline, TransientFeedback};
pub use keymap::{Key, bindings, command_for};
pub use link::{ClientRequest, LinkError, ServerEndpoint, ServerLink};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use scene::{SceneEntity, SceneEntityKind, SceneFrame, SceneTile, TileFlags, ZLayer};
pub use viewport::Viewport;
