//! Connection-status signal published by the transport layer.
use strum::Display;

/// Lifecycle of the socket link as this layer observes it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
    Error,
}

impl ConnectionStatus {
    /// Whether input should be accepted and commands forwarded.
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Connected)
    }
}
