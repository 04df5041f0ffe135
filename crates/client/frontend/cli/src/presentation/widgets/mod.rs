//! Widget library for the terminal UI.
//!
//! The three game-area backends (`grid_map`, `top_down`, `first_person`) are
//! pure consumers of the composited [`client_frontend_core::SceneFrame`];
//! the screen widgets draw straight from the snapshot's mode-gated sections.
pub mod battle;
pub mod character;
pub mod dialog;
pub mod first_person;
pub mod grid_map;
pub mod header;
pub mod help;
pub mod inventory;
pub mod message_log;
pub mod messages;
pub mod reading;
pub mod start_screen;
pub mod top_down;
