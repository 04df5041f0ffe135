//! Entity compositor: merges tiles, enemies, and items into one ordered
//! render list in view space.
use std::collections::HashMap;

use protocol::{EnemyState, GameState, ItemState};

use crate::{
    fov::{DEFAULT_CONE_RADIUS, in_facing_cone},
    scene::{SceneEntity, SceneEntityKind, SceneFrame, SceneTile, TileFlags, ZLayer},
    viewport::Viewport,
};

/// Lighting scalar for explored-but-fogged cells.
const FOG_LIGHT: f32 = 0.35;
/// Lighting scalar for visible cells outside the cone.
const BASE_LIGHT: f32 = 0.75;
/// Lighting scalar for cone-emphasized cells.
const CONE_LIGHT: f32 = 1.0;

/// Inputs the compositor needs beyond the snapshot itself.
#[derive(Clone, Copy, Debug)]
pub struct ComposeParams {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub tile_size: u32,
    pub cone_radius: f32,
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self {
            viewport_width: 20,
            viewport_height: 15,
            tile_size: 32,
            cone_radius: DEFAULT_CONE_RADIUS,
        }
    }
}

/// Builds the [`SceneFrame`] for one snapshot.
///
/// Returns `None` when the snapshot has no player or no dungeon; the caller
/// renders a loading placeholder instead of crashing the pass.
pub fn compose(state: &GameState, params: &ComposeParams) -> Option<SceneFrame> {
    let player = state.player.as_ref()?;
    let dungeon = state.dungeon.as_ref()?;

    let viewport = Viewport::centered(
        dungeon.width,
        dungeon.height,
        params.viewport_width,
        params.viewport_height,
        player.x,
        player.y,
    );

    let mut tiles = Vec::with_capacity((viewport.width * viewport.height) as usize);
    for view_y in 0..viewport.height as i32 {
        for view_x in 0..viewport.width as i32 {
            let (world_x, world_y) = viewport.to_world(view_x, view_y);
            let kind = dungeon.kind_at(world_x, world_y);
            let visible = dungeon.is_visible(world_x, world_y);
            let explored = dungeon.is_explored(world_x, world_y);

            let mut flags = TileFlags::empty();
            flags.set(TileFlags::VISIBLE, visible);
            flags.set(TileFlags::EXPLORED, explored);
            flags.set(TileFlags::DECORATED, kind.is_decorated());

            // Cone emphasis only on cells already explored and visible.
            let in_cone = visible
                && explored
                && in_facing_cone(
                    world_x - player.x,
                    world_y - player.y,
                    player.facing,
                    params.cone_radius,
                );
            flags.set(TileFlags::CONE, in_cone);

            let light = if !explored {
                0.0
            } else if !visible {
                FOG_LIGHT
            } else if in_cone {
                CONE_LIGHT
            } else {
                BASE_LIGHT
            };

            tiles.push(SceneTile { kind, flags, light });
        }
    }

    let mut entities = Vec::new();
    for item in &state.items {
        if let Some((x, y)) = visible_view_cell(dungeon, &viewport, item.x, item.y) {
            entities.push(SceneEntity {
                x,
                y,
                layer: ZLayer::Items,
                kind: SceneEntityKind::Item,
                symbol: item.symbol,
                elite: false,
            });
        }
    }
    for enemy in &state.enemies {
        if let Some((x, y)) = visible_view_cell(dungeon, &viewport, enemy.x, enemy.y) {
            entities.push(SceneEntity {
                x,
                y,
                layer: ZLayer::Actors,
                kind: SceneEntityKind::Enemy,
                symbol: enemy.symbol,
                elite: enemy.elite,
            });
        }
    }
    let player_view = viewport
        .to_view(player.x, player.y)
        .unwrap_or((0, 0));
    entities.push(SceneEntity {
        x: player_view.0,
        y: player_view.1,
        layer: ZLayer::Actors,
        kind: SceneEntityKind::Player,
        symbol: '@',
        elite: false,
    });

    entities.sort_by_key(SceneEntity::sort_key);

    Some(SceneFrame {
        world_width: dungeon.width,
        world_height: dungeon.height,
        tile_size: params.tile_size,
        viewport,
        tiles,
        entities,
        player: player_view,
        facing: player.facing,
    })
}

fn visible_view_cell(
    dungeon: &protocol::DungeonState,
    viewport: &Viewport,
    world_x: i32,
    world_y: i32,
) -> Option<(i32, i32)> {
    if !dungeon.is_visible(world_x, world_y) {
        return None;
    }
    viewport.to_view(world_x, world_y)
}

/// What occupies a view cell, for the character-grid backends.
#[derive(Clone, Copy, Debug)]
pub enum Occupant<'a> {
    Player,
    Enemy(&'a EnemyState),
    Item(&'a ItemState),
}

/// Cell occupancy resolved by priority: player > enemy > item. Terrain is
/// the implicit fallback for unoccupied cells.
pub struct OccupancyIndex<'a> {
    cells: HashMap<(i32, i32), Occupant<'a>>,
}

impl<'a> OccupancyIndex<'a> {
    pub fn build(state: &'a GameState, viewport: &Viewport) -> Self {
        let mut cells = HashMap::new();
        let Some(dungeon) = state.dungeon.as_ref() else {
            return Self { cells };
        };

        // Lowest priority first; later inserts overwrite.
        for item in &state.items {
            if let Some(cell) = visible_view_cell(dungeon, viewport, item.x, item.y) {
                cells.insert(cell, Occupant::Item(item));
            }
        }
        for enemy in &state.enemies {
            if let Some(cell) = visible_view_cell(dungeon, viewport, enemy.x, enemy.y) {
                cells.insert(cell, Occupant::Enemy(enemy));
            }
        }
        if let Some(player) = state.player.as_ref() {
            if let Some(cell) = viewport.to_view(player.x, player.y) {
                cells.insert(cell, Occupant::Player);
            }
        }

        Self { cells }
    }

    pub fn get(&self, view_x: i32, view_y: i32) -> Option<&Occupant<'a>> {
        self.cells.get(&(view_x, view_y))
    }
}

#[cfg(test)]
mod tests {
    use protocol::{DungeonState, PlayerState};

    use super::*;

    fn test_state(width: u32, height: u32, px: i32, py: i32) -> GameState {
        GameState {
            player: Some(PlayerState {
                x: px,
                y: py,
                health: 20,
                max_health: 20,
                attack: 1,
                defense: 1,
                level: 1,
                xp: 0,
                xp_to_level: 10,
                kills: 0,
                facing: protocol::Facing::NORTH,
            }),
            dungeon: Some(DungeonState {
                level: 1,
                width,
                height,
                tiles: (0..height).map(|_| ".".repeat(width as usize)).collect(),
                visible: Vec::new(),
                explored: Vec::new(),
            }),
            ..GameState::default()
        }
    }

    fn enemy(x: i32, y: i32) -> EnemyState {
        EnemyState {
            x,
            y,
            symbol: 'r',
            name: "rat".to_owned(),
            elite: false,
        }
    }

    fn item(x: i32, y: i32) -> ItemState {
        ItemState {
            x,
            y,
            symbol: '!',
            name: "potion".to_owned(),
        }
    }

    #[test]
    fn missing_player_or_dungeon_yields_no_frame() {
        let params = ComposeParams::default();
        assert!(compose(&GameState::default(), &params).is_none());

        let mut no_dungeon = test_state(20, 15, 5, 5);
        no_dungeon.dungeon = None;
        assert!(compose(&no_dungeon, &params).is_none());
    }

    #[test]
    fn entities_are_sorted_and_inside_the_viewport() {
        let mut state = test_state(60, 40, 30, 20);
        state.enemies = vec![enemy(31, 21), enemy(29, 19), enemy(0, 0), enemy(59, 39)];
        state.items = vec![item(30, 21), item(58, 39)];

        let frame = compose(&state, &ComposeParams::default()).unwrap();
        for entity in &frame.entities {
            assert!(entity.x >= 0 && (entity.x as u32) < frame.viewport.width);
            assert!(entity.y >= 0 && (entity.y as u32) < frame.viewport.height);
        }
        let keys: Vec<_> = frame.entities.iter().map(SceneEntity::sort_key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn off_viewport_entities_are_discarded() {
        let mut state = test_state(60, 40, 10, 10);
        state.enemies = vec![enemy(59, 39)];
        let frame = compose(&state, &ComposeParams::default()).unwrap();
        assert!(
            frame
                .entities
                .iter()
                .all(|e| e.kind != SceneEntityKind::Enemy)
        );
    }

    #[test]
    fn fogged_entities_are_not_drawn() {
        let mut state = test_state(20, 15, 10, 7);
        state.enemies = vec![enemy(12, 7)];
        let dungeon = state.dungeon.as_mut().unwrap();
        dungeon.visible = (0..15).map(|_| "0".repeat(20)).collect();
        dungeon.explored = (0..15).map(|_| "1".repeat(20)).collect();

        let frame = compose(&state, &ComposeParams::default()).unwrap();
        assert!(
            frame
                .entities
                .iter()
                .all(|e| e.kind != SceneEntityKind::Enemy)
        );
        // Explored-but-fogged cells keep their dim light, cone or not.
        let tile = frame.tile(10, 4).unwrap();
        assert!(!tile.flags.contains(TileFlags::CONE));
        assert!((tile.light - FOG_LIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn cone_cells_are_brighter_than_base() {
        let state = test_state(20, 15, 10, 7);
        let frame = compose(&state, &ComposeParams::default()).unwrap();
        // Facing north: three cells up is emphasized, three right is not.
        let ahead = frame.tile(10, 4).unwrap();
        let aside = frame.tile(13, 7).unwrap();
        assert!(ahead.flags.contains(TileFlags::CONE));
        assert!(!aside.flags.contains(TileFlags::CONE));
        assert!(ahead.light > aside.light);
    }

    #[test]
    fn occupancy_prefers_player_over_enemy_over_item() {
        let mut state = test_state(20, 15, 10, 7);
        state.enemies = vec![enemy(10, 7), enemy(11, 7)];
        state.items = vec![item(10, 7), item(11, 7), item(12, 7)];

        let frame = compose(&state, &ComposeParams::default()).unwrap();
        let index = OccupancyIndex::build(&state, &frame.viewport);
        assert!(matches!(index.get(10, 7), Some(Occupant::Player)));
        assert!(matches!(index.get(11, 7), Some(Occupant::Enemy(_))));
        assert!(matches!(index.get(12, 7), Some(Occupant::Item(_))));
        assert!(index.get(0, 0).is_none());
    }
}
