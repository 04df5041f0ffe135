//! Wire-facing data model shared between the Gloomward client and server.
//!
//! The server pushes [`GameState`] snapshots as whole JSON documents and the
//! client replies with flat command strings; this crate owns both
//! vocabularies. Snapshots are replaced wholesale on every push — nothing in
//! here is patched incrementally, so every type is a plain value.
pub mod command;
pub mod connection;
pub mod error;
pub mod state;
pub mod tile;
pub mod ui_mode;

pub use command::Command;
pub use connection::ConnectionStatus;
pub use error::ProtocolError;
pub use state::{
    BattleState, DialogState, DungeonState, EnemyState, Facing, GameState, InventoryEntry,
    InventoryState, ItemState, PlayerState, ReadingState,
};
pub use tile::TileKind;
pub use ui_mode::UiMode;
