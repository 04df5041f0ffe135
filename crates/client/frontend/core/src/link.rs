//! Transport link between the presentation layer and the network glue.
//!
//! The client side holds a [`ServerLink`]: subscribe to snapshot pushes,
//! watch the connection status, send commands. The glue side holds the
//! [`ServerEndpoint`] and owns the actual socket — which is out of scope
//! here; tests and the standalone binary drive the endpoint directly.
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch};

use protocol::{Command, ConnectionStatus, GameState};

/// What the client may ask the glue to do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClientRequest {
    /// Forward a resolved command verbatim, wire form.
    Command(String),
    /// Create a fresh session.
    NewGame,
}

#[derive(Debug, Error)]
pub enum LinkError {
    /// The glue side has gone away; nothing can be sent anymore.
    #[error("transport endpoint closed")]
    Closed,
}

/// Client half of the link. Cheap to clone; every clone shares the same
/// channels.
#[derive(Clone, Debug)]
pub struct ServerLink {
    requests: mpsc::Sender<ClientRequest>,
    states: broadcast::Sender<Arc<GameState>>,
    status: watch::Receiver<ConnectionStatus>,
}

impl ServerLink {
    /// A fresh receiver for inbound snapshots. Late subscribers only see
    /// pushes from after this call; snapshots are whole, so that is enough.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<GameState>> {
        self.states.subscribe()
    }

    /// Connection-status watch; `borrow()` gives the current value.
    pub fn status(&self) -> watch::Receiver<ConnectionStatus> {
        self.status.clone()
    }

    /// Forwards a command. A full queue drops the command with a warning —
    /// input is lossy under backpressure, same as frames.
    pub fn send(&self, command: Command) -> Result<(), LinkError> {
        self.request(ClientRequest::Command(command.wire().to_owned()))
    }

    /// Asks the glue for a new session.
    pub fn new_game(&self) -> Result<(), LinkError> {
        self.request(ClientRequest::NewGame)
    }

    fn request(&self, request: ClientRequest) -> Result<(), LinkError> {
        match self.requests.try_send(request) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(dropped)) => {
                tracing::warn!(?dropped, "request queue full, dropping");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(LinkError::Closed),
        }
    }
}

/// Glue half of the link.
#[derive(Debug)]
pub struct ServerEndpoint {
    requests: mpsc::Receiver<ClientRequest>,
    states: broadcast::Sender<Arc<GameState>>,
    status: watch::Sender<ConnectionStatus>,
}

impl ServerEndpoint {
    /// Publishes one snapshot to every subscriber.
    pub fn push_state(&self, state: GameState) {
        // Zero receivers just means nobody mounted a view yet.
        let _ = self.states.send(Arc::new(state));
    }

    pub fn set_status(&self, status: ConnectionStatus) {
        let _ = self.status.send(status);
    }

    /// Next outbound request; `None` once every `ServerLink` is dropped.
    pub async fn next_request(&mut self) -> Option<ClientRequest> {
        self.requests.recv().await
    }
}

/// Builds a connected link/endpoint pair.
pub fn channel(request_capacity: usize) -> (ServerLink, ServerEndpoint) {
    let (request_tx, request_rx) = mpsc::channel(request_capacity.max(1));
    let (state_tx, _) = broadcast::channel(16);
    let (status_tx, status_rx) = watch::channel(ConnectionStatus::Connecting);

    (
        ServerLink {
            requests: request_tx,
            states: state_tx.clone(),
            status: status_rx,
        },
        ServerEndpoint {
            requests: request_rx,
            states: state_tx,
            status: status_tx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshots_reach_subscribers() {
        let (link, endpoint) = channel(4);
        let mut states = link.subscribe();
        endpoint.push_state(GameState {
            turn: 7,
            ..GameState::default()
        });
        let received = states.recv().await.unwrap();
        assert_eq!(received.turn, 7);
    }

    #[tokio::test]
    async fn commands_arrive_in_wire_form() {
        let (link, mut endpoint) = channel(4);
        link.send(Command::MoveUp).unwrap();
        link.new_game().unwrap();
        assert_eq!(
            endpoint.next_request().await,
            Some(ClientRequest::Command("MOVE_UP".to_owned()))
        );
        assert_eq!(endpoint.next_request().await, Some(ClientRequest::NewGame));
    }

    #[tokio::test]
    async fn status_watch_tracks_the_endpoint() {
        let (link, endpoint) = channel(4);
        let status = link.status();
        assert_eq!(*status.borrow(), ConnectionStatus::Connecting);
        endpoint.set_status(ConnectionStatus::Connected);
        assert_eq!(*link.status().borrow(), ConnectionStatus::Connected);
    }

    #[tokio::test]
    async fn sends_after_endpoint_drop_fail() {
        let (link, endpoint) = channel(4);
        drop(endpoint);
        assert!(matches!(link.send(Command::Quit), Err(LinkError::Closed)));
    }
}
