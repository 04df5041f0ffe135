//! Keyboard translation for the CLI frontend.
//!
//! This module is the frontend's side of the injected input port: it turns
//! crossterm events into the core's [`Key`] values and knows nothing about
//! modes or commands. Host-level chords (Ctrl-C, Ctrl-Q) are resolved here
//! because they must work even while the dispatcher is swallowing input.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use client_frontend_core::Key;

/// Outcome of translating one raw key event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyInput {
    /// Hand the key to the input dispatcher.
    Dispatch(Key),
    /// Host-level quit, bypassing the dispatcher.
    ForceQuit,
    /// Nothing the core cares about.
    None,
}

/// Translates a crossterm key event into the core's key vocabulary.
pub fn translate_key(event: KeyEvent) -> KeyInput {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyInput::ForceQuit,
            _ => KeyInput::None,
        };
    }

    let key = match event.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return KeyInput::None,
    };
    KeyInput::Dispatch(key)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(code)
        }
    }

    #[test]
    fn characters_keep_their_case() {
        assert_eq!(
            translate_key(key(KeyCode::Char('d'))),
            KeyInput::Dispatch(Key::Char('d'))
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('Q'))),
            KeyInput::Dispatch(Key::Char('Q'))
        );
    }

    #[test]
    fn arrows_and_escape_translate() {
        assert_eq!(translate_key(key(KeyCode::Up)), KeyInput::Dispatch(Key::Up));
        assert_eq!(
            translate_key(key(KeyCode::Esc)),
            KeyInput::Dispatch(Key::Escape)
        );
        assert_eq!(
            translate_key(key(KeyCode::PageDown)),
            KeyInput::Dispatch(Key::PageDown)
        );
    }

    #[test]
    fn control_chords_force_quit() {
        assert_eq!(translate_key(ctrl(KeyCode::Char('c'))), KeyInput::ForceQuit);
        assert_eq!(translate_key(ctrl(KeyCode::Char('q'))), KeyInput::ForceQuit);
        assert_eq!(translate_key(ctrl(KeyCode::Char('x'))), KeyInput::None);
    }

    #[test]
    fn function_keys_are_ignored() {
        assert_eq!(translate_key(key(KeyCode::F(5))), KeyInput::None);
    }
}
