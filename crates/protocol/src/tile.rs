//! Tile vocabulary shared by snapshots and the scene renderer.
use strum::Display;

/// Classification of a single dungeon cell.
///
/// The first six variants are the core set every backend understands; the
/// rest are the extension set used only by the richer scene renderers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    Wall,
    #[default]
    Floor,
    Door,
    StairsUp,
    StairsDown,
    Water,
    DeepWater,
    Lava,
    Ice,
    PoisonGas,
}

impl TileKind {
    /// Classifies a single-character tile code.
    ///
    /// Codes outside the table classify as [`TileKind::Floor`] so a snapshot
    /// with unknown terrain still renders.
    pub const fn from_code(code: char) -> Self {
        match code {
            '#' => Self::Wall,
            '.' => Self::Floor,
            '+' => Self::Door,
            '<' => Self::StairsUp,
            '>' => Self::StairsDown,
            '~' => Self::Water,
            'w' => Self::DeepWater,
            'l' => Self::Lava,
            'i' => Self::Ice,
            'g' => Self::PoisonGas,
            _ => Self::Floor,
        }
    }

    /// Canonical code for the kind.
    pub const fn code(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Door => '+',
            Self::StairsUp => '<',
            Self::StairsDown => '>',
            Self::Water => '~',
            Self::DeepWater => 'w',
            Self::Lava => 'l',
            Self::Ice => 'i',
            Self::PoisonGas => 'g',
        }
    }

    /// Whether the first-person sweep draws this cell as a solid face.
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Wall | Self::Door)
    }

    /// Cells the compositor marks as decorated (anything beyond plain floor
    /// or wall — stairs, doors, liquids, hazards).
    pub const fn is_decorated(self) -> bool {
        !matches!(self, Self::Wall | Self::Floor)
    }

    /// Hazardous ground from the extension set.
    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Lava | Self::PoisonGas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_codes_round_trip() {
        for kind in [
            TileKind::Wall,
            TileKind::Floor,
            TileKind::Door,
            TileKind::StairsUp,
            TileKind::StairsDown,
            TileKind::Water,
            TileKind::DeepWater,
            TileKind::Lava,
            TileKind::Ice,
            TileKind::PoisonGas,
        ] {
            assert_eq!(TileKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_floor() {
        assert_eq!(TileKind::from_code('?'), TileKind::Floor);
        assert_eq!(TileKind::from_code('Z'), TileKind::Floor);
        assert_eq!(TileKind::from_code(' '), TileKind::Floor);
    }

    #[test]
    fn solidity_and_decoration() {
        assert!(TileKind::Wall.is_solid());
        assert!(TileKind::Door.is_solid());
        assert!(!TileKind::Water.is_solid());
        assert!(TileKind::StairsDown.is_decorated());
        assert!(!TileKind::Floor.is_decorated());
        assert!(TileKind::Lava.is_hazard());
    }
}
