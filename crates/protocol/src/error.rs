//! Protocol-level error types.
use thiserror::Error;

/// Failures while decoding server pushes or client command strings.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The snapshot document did not parse as a `GameState`.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A command string outside the closed vocabulary.
    #[error("unknown command string: {0:?}")]
    UnknownCommand(String),
}
