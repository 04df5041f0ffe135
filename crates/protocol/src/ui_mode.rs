//! Server-assigned UI mode.
use serde::{Deserialize, Serialize};
use strum::Display;

/// Which interaction mode the game is currently in.
///
/// The mode is part of the authoritative snapshot: the client reads it to
/// pick a key table but never transitions it directly — it only sends
/// commands the server may honor with a mode change.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UiMode {
    #[default]
    Game,
    Inventory,
    Dialog,
    MessageLog,
    Character,
    Help,
    Reading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_casing() {
        let json = serde_json::to_string(&UiMode::MessageLog).unwrap();
        assert_eq!(json, "\"MESSAGE_LOG\"");
        let back: UiMode = serde_json::from_str("\"INVENTORY\"").unwrap();
        assert_eq!(back, UiMode::Inventory);
    }

    #[test]
    fn default_mode_is_game() {
        assert_eq!(UiMode::default(), UiMode::Game);
    }
}
