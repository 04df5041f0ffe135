//! Backend-agnostic description of one rendered frame.
use bitflags::bitflags;
use protocol::{Facing, TileKind};

use crate::viewport::Viewport;

bitflags! {
    /// Per-tile render flags.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct TileFlags: u8 {
        /// Currently visible per the upstream simulation.
        const VISIBLE = 1 << 0;
        /// Seen at some point this run.
        const EXPLORED = 1 << 1;
        /// Anything beyond plain floor/wall (stairs, doors, liquids).
        const DECORATED = 1 << 2;
        /// Inside the facing cone. Only ever set together with VISIBLE and
        /// EXPLORED; fog decided upstream is never overridden.
        const CONE = 1 << 3;
    }
}

/// Fixed z-order for drawables. Sort key is (layer, y, x) ascending, which
/// pins paint order deterministically across frames.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum ZLayer {
    Tiles = 0,
    Decals = 1,
    Items = 2,
    Traps = 3,
    Hazards = 4,
    Actors = 5,
    Effects = 6,
    Fog = 7,
    Ui = 8,
}

/// One composited tile, already in view space.
#[derive(Clone, Copy, Debug)]
pub struct SceneTile {
    pub kind: TileKind,
    pub flags: TileFlags,
    /// Lighting scalar in [0, 1]; 0 for unexplored cells.
    pub light: f32,
}

/// What kind of drawable an entity is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SceneEntityKind {
    Player,
    Enemy,
    Item,
}

/// One drawable entity in view-space coordinates.
#[derive(Clone, Debug)]
pub struct SceneEntity {
    pub x: i32,
    pub y: i32,
    pub layer: ZLayer,
    pub kind: SceneEntityKind,
    pub symbol: char,
    pub elite: bool,
}

impl SceneEntity {
    /// The deterministic paint-order key.
    pub fn sort_key(&self) -> (ZLayer, i32, i32) {
        (self.layer, self.y, self.x)
    }
}

/// The full composited frame handed to rendering backends.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub world_width: u32,
    pub world_height: u32,
    /// Tile edge length in pixels, used by the canvas backends.
    pub tile_size: u32,
    pub viewport: Viewport,
    /// Row-major within the viewport, `tiles[vy * viewport.width + vx]`.
    pub tiles: Vec<SceneTile>,
    /// Sorted by [`SceneEntity::sort_key`].
    pub entities: Vec<SceneEntity>,
    /// Player position in view space.
    pub player: (i32, i32),
    pub facing: Facing,
}

impl SceneFrame {
    pub fn tile(&self, view_x: i32, view_y: i32) -> Option<&SceneTile> {
        if view_x < 0
            || view_y < 0
            || view_x as u32 >= self.viewport.width
            || view_y as u32 >= self.viewport.height
        {
            return None;
        }
        self.tiles
            .get(view_y as usize * self.viewport.width as usize + view_x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_layers_order_as_specified() {
        assert!(ZLayer::Tiles < ZLayer::Decals);
        assert!(ZLayer::Items < ZLayer::Actors);
        assert!(ZLayer::Actors < ZLayer::Effects);
        assert!(ZLayer::Fog < ZLayer::Ui);
        assert_eq!(ZLayer::Hazards as u8, 4);
    }

    #[test]
    fn cone_flag_implies_visible_and_explored_by_construction() {
        // The compositor is the only writer; this documents the invariant
        // the flags type expects.
        let flags = TileFlags::VISIBLE | TileFlags::EXPLORED | TileFlags::CONE;
        assert!(flags.contains(TileFlags::VISIBLE | TileFlags::EXPLORED));
    }
}
