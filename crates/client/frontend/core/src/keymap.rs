//! Per-mode key→command tables.
//!
//! The tables are data, not control flow: one static slice per UI mode,
//! searched in order. Two rules sit outside the tables: Escape maps to
//! CLOSE_SCREEN before any lookup, and MESSAGE_LOG treats every unbound key
//! as CLOSE_SCREEN (the only mode with a catch-all).
use protocol::{Command, UiMode};

/// A raw key as delivered by the input port. Frontends translate their
/// native key events into this before asking for a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    Backspace,
    PageUp,
    PageDown,
}

type Binding = (Key, Command);

const GAME_BINDINGS: &[Binding] = &[
    // Movement
    (Key::Up, Command::MoveUp),
    (Key::Down, Command::MoveDown),
    (Key::Left, Command::MoveLeft),
    (Key::Right, Command::MoveRight),
    (Key::Char('w'), Command::MoveUp),
    (Key::Char('s'), Command::MoveDown),
    (Key::Char('a'), Command::MoveLeft),
    (Key::Char('d'), Command::MoveRight),
    // Facing
    (Key::Char('q'), Command::TurnLeft),
    (Key::Char('e'), Command::TurnRight),
    // World interaction; search sits on 'f' because WASD occupies 's'
    (Key::Char('f'), Command::Search),
    (Key::Char('>'), Command::Descend),
    // Quick item slots
    (Key::Char('1'), Command::UseItem1),
    (Key::Char('2'), Command::UseItem2),
    (Key::Char('3'), Command::UseItem3),
    // Screens
    (Key::Char('i'), Command::OpenInventory),
    (Key::Char('c'), Command::OpenCharacter),
    (Key::Char('?'), Command::OpenHelp),
    (Key::Char('m'), Command::OpenMessageLog),
    // Meta, deliberately shifted
    (Key::Char('Q'), Command::Quit),
    (Key::Char('N'), Command::NewGame),
];

const INVENTORY_BINDINGS: &[Binding] = &[
    (Key::Up, Command::InventoryUp),
    (Key::Down, Command::InventoryDown),
    (Key::Char('w'), Command::InventoryUp),
    (Key::Char('s'), Command::InventoryDown),
    (Key::Enter, Command::InventoryUse),
    (Key::Char('u'), Command::InventoryUse),
    (Key::Char('d'), Command::InventoryDrop),
    (Key::Char('r'), Command::InventoryRead),
    (Key::Char('i'), Command::CloseScreen),
    (Key::Char('I'), Command::CloseScreen),
    (Key::Char('q'), Command::CloseScreen),
    (Key::Char('Q'), Command::CloseScreen),
];

const DIALOG_BINDINGS: &[Binding] = &[
    (Key::Char('y'), Command::Confirm),
    (Key::Char('Y'), Command::Confirm),
    (Key::Enter, Command::Confirm),
    (Key::Char('n'), Command::Cancel),
    (Key::Char('N'), Command::Cancel),
];

const MESSAGE_LOG_BINDINGS: &[Binding] = &[
    (Key::Up, Command::ScrollUp),
    (Key::Down, Command::ScrollDown),
    (Key::Char('w'), Command::ScrollUp),
    (Key::Char('s'), Command::ScrollDown),
    (Key::PageUp, Command::PageUp),
    (Key::PageDown, Command::PageDown),
];

const CHARACTER_BINDINGS: &[Binding] = &[
    (Key::Char('c'), Command::CloseScreen),
    (Key::Char('C'), Command::CloseScreen),
    (Key::Enter, Command::CloseScreen),
];

const HELP_BINDINGS: &[Binding] = &[
    (Key::Char('?'), Command::CloseScreen),
    (Key::Enter, Command::CloseScreen),
];

const READING_BINDINGS: &[Binding] = &[
    (Key::Enter, Command::CloseScreen),
    (Key::Char(' '), Command::CloseScreen),
];

/// The binding table for a mode, in declaration order. Help screens render
/// straight from this so documentation cannot drift from behavior.
pub const fn bindings(mode: UiMode) -> &'static [(Key, Command)] {
    match mode {
        UiMode::Game => GAME_BINDINGS,
        UiMode::Inventory => INVENTORY_BINDINGS,
        UiMode::Dialog => DIALOG_BINDINGS,
        UiMode::MessageLog => MESSAGE_LOG_BINDINGS,
        UiMode::Character => CHARACTER_BINDINGS,
        UiMode::Help => HELP_BINDINGS,
        UiMode::Reading => READING_BINDINGS,
    }
}

/// Resolves a key against the current mode's table.
///
/// Returns `None` for keys the mode does not bind; unrecognized input is
/// ignored, not an error.
pub fn command_for(mode: UiMode, key: Key) -> Option<Command> {
    // Universal override, checked before any table.
    if key == Key::Escape {
        return Some(Command::CloseScreen);
    }

    let bound = bindings(mode)
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, command)| *command);

    match (mode, bound) {
        // The message log closes on anything it does not understand.
        (UiMode::MessageLog, None) => Some(Command::CloseScreen),
        (_, resolved) => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_everywhere() {
        for mode in [
            UiMode::Game,
            UiMode::Inventory,
            UiMode::Dialog,
            UiMode::MessageLog,
            UiMode::Character,
            UiMode::Help,
            UiMode::Reading,
        ] {
            assert_eq!(command_for(mode, Key::Escape), Some(Command::CloseScreen));
        }
    }

    #[test]
    fn game_mode_binds_movement_both_ways() {
        assert_eq!(command_for(UiMode::Game, Key::Up), Some(Command::MoveUp));
        assert_eq!(
            command_for(UiMode::Game, Key::Char('a')),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            command_for(UiMode::Game, Key::Char('e')),
            Some(Command::TurnRight)
        );
        assert_eq!(
            command_for(UiMode::Game, Key::Char('>')),
            Some(Command::Descend)
        );
        assert_eq!(
            command_for(UiMode::Game, Key::Char('2')),
            Some(Command::UseItem2)
        );
    }

    #[test]
    fn inventory_drop_and_unbound_key() {
        assert_eq!(
            command_for(UiMode::Inventory, Key::Char('d')),
            Some(Command::InventoryDrop)
        );
        assert_eq!(command_for(UiMode::Inventory, Key::Char('z')), None);
    }

    #[test]
    fn dialog_binds_exactly_yes_no_enter_escape() {
        let produces: Vec<Key> = vec![
            Key::Char('y'),
            Key::Char('Y'),
            Key::Enter,
            Key::Char('n'),
            Key::Char('N'),
            Key::Escape,
        ];
        for key in &produces {
            assert!(command_for(UiMode::Dialog, *key).is_some());
        }

        // A broad sample of everything else stays silent.
        let mut silent: Vec<Key> = (b'a'..=b'z')
            .chain(b'A'..=b'Z')
            .chain(b'0'..=b'9')
            .map(|c| Key::Char(c as char))
            .collect();
        silent.extend([
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Tab,
            Key::Backspace,
            Key::PageUp,
            Key::PageDown,
        ]);
        for key in silent {
            if produces.contains(&key) {
                continue;
            }
            assert_eq!(command_for(UiMode::Dialog, key), None, "{key:?} leaked");
        }
    }

    #[test]
    fn message_log_catches_all() {
        assert_eq!(
            command_for(UiMode::MessageLog, Key::Up),
            Some(Command::ScrollUp)
        );
        assert_eq!(
            command_for(UiMode::MessageLog, Key::PageDown),
            Some(Command::PageDown)
        );
        // Unbound keys close the screen instead of being ignored.
        assert_eq!(
            command_for(UiMode::MessageLog, Key::Char('x')),
            Some(Command::CloseScreen)
        );
    }

    #[test]
    fn passive_screens_only_close() {
        for mode in [UiMode::Character, UiMode::Help, UiMode::Reading] {
            for key in [Key::Char('x'), Key::Up, Key::Char('5')] {
                assert_eq!(command_for(mode, key), None);
            }
            assert_eq!(command_for(mode, Key::Enter), Some(Command::CloseScreen));
        }
    }
}
