//! Game-state snapshots as pushed by the server.
//!
//! A snapshot is the full, authoritative description of one turn. The
//! `player` and `dungeon` sections may be absent (no active session, or a
//! session still being set up); the mode-gated sections (`battle`, `dialog`,
//! `inventory`, `reading`) are populated only when [`UiMode`] requires them.
use serde::{Deserialize, Serialize};

use crate::{error::ProtocolError, tile::TileKind, ui_mode::UiMode};

/// One full server push.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub turn: u64,
    #[serde(default)]
    pub ui_mode: UiMode,
    #[serde(default)]
    pub player: Option<PlayerState>,
    #[serde(default)]
    pub dungeon: Option<DungeonState>,
    #[serde(default)]
    pub enemies: Vec<EnemyState>,
    #[serde(default)]
    pub items: Vec<ItemState>,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub battle: Option<BattleState>,
    #[serde(default)]
    pub dialog: Option<DialogState>,
    #[serde(default)]
    pub inventory: Option<InventoryState>,
    #[serde(default)]
    pub reading: Option<ReadingState>,
}

impl GameState {
    /// Decodes one snapshot document.
    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encodes the snapshot (server side and tests).
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// A session exists once the server ships both a player and a dungeon.
    pub fn has_session(&self) -> bool {
        self.player.is_some() && self.dungeon.is_some()
    }
}

/// Player block of the snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub max_health: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub xp_to_level: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default = "Facing::north")]
    pub facing: Facing,
}

/// Axis-aligned facing direction, one of the four unit vectors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Facing {
    pub dx: i32,
    pub dy: i32,
}

impl Facing {
    pub const NORTH: Self = Self { dx: 0, dy: -1 };
    pub const SOUTH: Self = Self { dx: 0, dy: 1 };
    pub const WEST: Self = Self { dx: -1, dy: 0 };
    pub const EAST: Self = Self { dx: 1, dy: 0 };

    /// Serde default: a fresh player faces north.
    pub const fn north() -> Self {
        Self::NORTH
    }

    /// Counter-clockwise quarter turn (screen coordinates, y grows down).
    pub const fn rotated_left(self) -> Self {
        Self {
            dx: self.dy,
            dy: -self.dx,
        }
    }

    /// Clockwise quarter turn.
    pub const fn rotated_right(self) -> Self {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }

    /// The rightward perpendicular, used as the lateral axis by the
    /// first-person sweep.
    pub const fn perpendicular(self) -> Self {
        self.rotated_right()
    }

    pub fn as_unit(self) -> (f32, f32) {
        (self.dx as f32, self.dy as f32)
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self::NORTH
    }
}

/// Dungeon block: the tile grid plus optional visibility masks.
///
/// `tiles` is row-major, `tiles[y][x]`, one code character per cell. The
/// `visible`/`explored` rows use `'1'`/`'0'`; when a mask is absent the whole
/// grid counts as visible respectively explored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DungeonState {
    #[serde(default)]
    pub level: u32,
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<String>,
    #[serde(default)]
    pub visible: Vec<String>,
    #[serde(default)]
    pub explored: Vec<String>,
}

impl DungeonState {
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Raw code character at a cell, if in bounds.
    pub fn tile_code(&self, x: i32, y: i32) -> Option<char> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.tiles.get(y as usize)?.chars().nth(x as usize)
    }

    /// Classified tile at a cell. Out-of-bounds reads classify as wall so
    /// sweeps terminate at the world edge.
    pub fn kind_at(&self, x: i32, y: i32) -> TileKind {
        match self.tile_code(x, y) {
            Some(code) => TileKind::from_code(code),
            None => TileKind::Wall,
        }
    }

    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        mask_bit(&self.visible, x, y).unwrap_or(true)
    }

    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        mask_bit(&self.explored, x, y).unwrap_or(true)
    }
}

fn mask_bit(rows: &[String], x: i32, y: i32) -> Option<bool> {
    if rows.is_empty() || x < 0 || y < 0 {
        return None;
    }
    let row = rows.get(y as usize)?;
    row.chars().nth(x as usize).map(|bit| bit == '1')
}

/// One enemy in world coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemyState {
    pub x: i32,
    pub y: i32,
    pub symbol: char,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub elite: bool,
}

/// One loose item in world coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemState {
    pub x: i32,
    pub y: i32,
    pub symbol: char,
    #[serde(default)]
    pub name: String,
}

/// Enemy status strip shown while `ui_mode` involves combat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleState {
    pub enemy_name: String,
    pub enemy_symbol: char,
    pub enemy_health: i32,
    pub enemy_max_health: i32,
}

/// Yes/no prompt contents for `UiMode::Dialog`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DialogState {
    pub prompt: String,
    #[serde(default)]
    pub detail: Vec<String>,
}

/// Inventory screen contents; the selection index is server-owned since
/// INVENTORY_UP/DOWN are commands like any other.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InventoryState {
    #[serde(default)]
    pub entries: Vec<InventoryEntry>,
    #[serde(default)]
    pub selected: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub name: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub readable: bool,
}

/// Contents of a readable item for `UiMode::Reading`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReadingState {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_dungeon(width: u32, height: u32) -> DungeonState {
        DungeonState {
            level: 1,
            width,
            height,
            tiles: (0..height)
                .map(|_| ".".repeat(width as usize))
                .collect(),
            visible: Vec::new(),
            explored: Vec::new(),
        }
    }

    #[test]
    fn minimal_snapshot_decodes_without_session() {
        let state = GameState::from_json(r#"{"turn": 3, "ui_mode": "GAME"}"#).unwrap();
        assert_eq!(state.turn, 3);
        assert!(!state.has_session());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn malformed_snapshot_is_an_error_not_a_panic() {
        assert!(GameState::from_json("{not json").is_err());
    }

    #[test]
    fn snapshot_round_trips() {
        let state = GameState {
            turn: 42,
            ui_mode: UiMode::Inventory,
            player: Some(PlayerState {
                x: 4,
                y: 2,
                health: 17,
                max_health: 20,
                attack: 5,
                defense: 3,
                level: 2,
                xp: 35,
                xp_to_level: 60,
                kills: 7,
                facing: Facing::EAST,
            }),
            dungeon: Some(floor_dungeon(8, 6)),
            ..GameState::default()
        };
        let back = GameState::from_json(&state.to_json().unwrap()).unwrap();
        assert!(back.has_session());
        assert_eq!(back.ui_mode, UiMode::Inventory);
        assert_eq!(back.player.unwrap().facing, Facing::EAST);
    }

    #[test]
    fn tile_lookup_is_row_major_and_bounded() {
        let mut dungeon = floor_dungeon(4, 3);
        dungeon.tiles[1] = "#.>~".to_owned();
        assert_eq!(dungeon.kind_at(0, 1), TileKind::Wall);
        assert_eq!(dungeon.kind_at(2, 1), TileKind::StairsDown);
        assert_eq!(dungeon.kind_at(3, 1), TileKind::Water);
        // Out of bounds reads as wall.
        assert_eq!(dungeon.kind_at(-1, 0), TileKind::Wall);
        assert_eq!(dungeon.kind_at(0, 3), TileKind::Wall);
    }

    #[test]
    fn missing_masks_mean_fully_visible() {
        let dungeon = floor_dungeon(2, 2);
        assert!(dungeon.is_visible(1, 1));
        assert!(dungeon.is_explored(0, 0));
    }

    #[test]
    fn masks_gate_per_cell() {
        let mut dungeon = floor_dungeon(3, 1);
        dungeon.visible = vec!["101".to_owned()];
        dungeon.explored = vec!["110".to_owned()];
        assert!(dungeon.is_visible(0, 0));
        assert!(!dungeon.is_visible(1, 0));
        assert!(!dungeon.is_explored(2, 0));
    }

    #[test]
    fn facing_rotations_cycle() {
        let mut facing = Facing::NORTH;
        for _ in 0..4 {
            facing = facing.rotated_right();
        }
        assert_eq!(facing, Facing::NORTH);
        assert_eq!(Facing::NORTH.rotated_right(), Facing::EAST);
        assert_eq!(Facing::NORTH.rotated_left(), Facing::WEST);
        assert_eq!(Facing::EAST.perpendicular(), Facing::SOUTH);
    }
}
