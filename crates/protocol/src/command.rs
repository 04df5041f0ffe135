//! Client command vocabulary.
//!
//! Commands travel as flat, case-sensitive strings. The wire form of every
//! variant is its SCREAMING_SNAKE_CASE name; `Display`/`FromStr` round-trip
//! through exactly that form.
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ProtocolError;

/// Everything the client may ask of the server, exhaustive per UI mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    // Movement and facing
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TurnLeft,
    TurnRight,

    // World interaction
    Search,
    Descend,
    Quit,

    // Screen opening / closing
    OpenInventory,
    OpenCharacter,
    OpenHelp,
    OpenMessageLog,
    CloseScreen,

    // Inventory sub-commands
    InventoryUp,
    InventoryDown,
    InventoryUse,
    InventoryDrop,
    InventoryRead,

    // Dialog
    Confirm,
    Cancel,

    // Log scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // Quick item slots
    #[strum(serialize = "USE_ITEM_1")]
    UseItem1,
    #[strum(serialize = "USE_ITEM_2")]
    UseItem2,
    #[strum(serialize = "USE_ITEM_3")]
    UseItem3,

    // Meta (session handling, see the input dispatcher)
    NewGame,
    AnyKey,
}

impl Command {
    /// Wire form of the command.
    pub fn wire(self) -> &'static str {
        self.into()
    }

    /// Parses a wire string, rejecting anything outside the vocabulary.
    pub fn from_wire(raw: &str) -> Result<Self, ProtocolError> {
        Self::from_str(raw).map_err(|_| ProtocolError::UnknownCommand(raw.to_owned()))
    }
}
