//! Event handling for the CLI client.
//!
//! One tokio task multiplexes inbound snapshots, keyboard input, and the
//! feedback tick; every event is processed to completion before the next.
mod r#loop;

pub use r#loop::EventLoop;
