//! Input dispatcher: from raw key to an action the app layer can take.
use protocol::{Command, UiMode};

use crate::keymap::{Key, command_for};

/// UI context the dispatcher needs alongside the key itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputContext {
    pub mode: UiMode,
    pub has_session: bool,
    pub is_spectator: bool,
    pub is_connected: bool,
}

/// Outcome of dispatching one key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dispatch {
    /// Forward the command to the server verbatim.
    Forward(Command),
    /// Ask the transport for a fresh session.
    StartSession,
    /// Tear the client session down (quit to the host).
    EndSession,
    /// Swallowed; nothing to do.
    Ignored,
}

/// Resolves a key event into a dispatch outcome.
///
/// Spectators and dead connections swallow everything. With no active
/// session, QUIT tears down and every other key starts a session — that is
/// the whole "press any key to start" implementation; the server never sees
/// input while no session exists.
pub fn dispatch(key: Key, ctx: InputContext) -> Dispatch {
    if ctx.is_spectator || !ctx.is_connected {
        return Dispatch::Ignored;
    }

    if !ctx.has_session {
        return match command_for(ctx.mode, key) {
            Some(Command::Quit) => Dispatch::EndSession,
            _ => Dispatch::StartSession,
        };
    }

    match command_for(ctx.mode, key) {
        // NEW_GAME restarts even mid-session.
        Some(Command::NewGame) => Dispatch::StartSession,
        Some(command) => Dispatch::Forward(command),
        None => Dispatch::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_game() -> InputContext {
        InputContext {
            mode: UiMode::Game,
            has_session: true,
            is_spectator: false,
            is_connected: true,
        }
    }

    fn no_session() -> InputContext {
        InputContext {
            has_session: false,
            ..in_game()
        }
    }

    #[test]
    fn spectators_and_dead_connections_are_swallowed() {
        let spectating = InputContext {
            is_spectator: true,
            ..in_game()
        };
        assert_eq!(dispatch(Key::Up, spectating), Dispatch::Ignored);

        let offline = InputContext {
            is_connected: false,
            ..in_game()
        };
        assert_eq!(dispatch(Key::Up, offline), Dispatch::Ignored);
    }

    #[test]
    fn in_session_commands_are_forwarded_verbatim() {
        assert_eq!(
            dispatch(Key::Up, in_game()),
            Dispatch::Forward(Command::MoveUp)
        );
        assert_eq!(
            dispatch(Key::Char('>'), in_game()),
            Dispatch::Forward(Command::Descend)
        );
    }

    #[test]
    fn unbound_keys_in_session_are_ignored() {
        assert_eq!(dispatch(Key::Char('z'), in_game()), Dispatch::Ignored);
    }

    #[test]
    fn new_game_restarts_even_mid_session() {
        assert_eq!(dispatch(Key::Char('N'), in_game()), Dispatch::StartSession);
    }

    #[test]
    fn quit_mid_session_is_forwarded_not_teardown() {
        assert_eq!(
            dispatch(Key::Char('Q'), in_game()),
            Dispatch::Forward(Command::Quit)
        );
    }

    #[test]
    fn any_key_starts_a_session_when_none_exists() {
        // Enter is unbound in GAME mode; it still starts the session.
        assert_eq!(dispatch(Key::Enter, no_session()), Dispatch::StartSession);
        assert_eq!(
            dispatch(Key::Char('x'), no_session()),
            Dispatch::StartSession
        );
        assert_eq!(
            dispatch(Key::Char('N'), no_session()),
            Dispatch::StartSession
        );
    }

    #[test]
    fn quit_without_a_session_tears_down() {
        assert_eq!(dispatch(Key::Char('Q'), no_session()), Dispatch::EndSession);
    }
}
