//! Perspective projection and lighting math for the first-person backend.
//!
//! Everything here is a pure function of its arguments; nothing touches a
//! canvas. Depth is clamped before any division, so screen coordinates are
//! always finite.
use protocol::Facing;

/// Calibration constants tying tile units to screen geometry.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionParams {
    /// Smallest depth ever divided by, in tile units.
    pub min_depth: f32,
    /// Vertical field of view in radians.
    pub vertical_fov: f32,
    /// Tile edge length in world units.
    pub tile_size: f32,
    /// Wall height in world units.
    pub wall_height: f32,
    /// Camera height above the floor in world units.
    pub camera_height: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            min_depth: 0.2,
            vertical_fov: 60f32.to_radians(),
            tile_size: 32.0,
            wall_height: 48.0,
            camera_height: 24.0,
        }
    }
}

/// Screen geometry of one wall face at a given depth and lateral offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub wall_top: f32,
    pub wall_bottom: f32,
    pub screen_x: f32,
    pub scale: f32,
    pub horizon: f32,
}

/// Projects a world-relative (lateral offset, depth) pair onto the canvas.
///
/// The focal length is derived from the vertical FOV and canvas height and
/// used for both axes, so aspect ratio is preserved.
pub fn project(
    canvas_width: f32,
    canvas_height: f32,
    depth: f32,
    offset: f32,
    params: &ProjectionParams,
) -> Projection {
    let depth = depth.max(params.min_depth);
    let world_z = depth * params.tile_size;
    let world_x = offset * params.tile_size;

    let focal = (canvas_height / 2.0) / (params.vertical_fov / 2.0).tan();
    let horizon = canvas_height / 2.0;

    Projection {
        screen_x: canvas_width / 2.0 + focal * world_x / world_z,
        wall_top: horizon - focal * (params.wall_height - params.camera_height) / world_z,
        wall_bottom: horizon - focal * (0.0 - params.camera_height) / world_z,
        scale: params.tile_size / world_z,
        horizon,
    }
}

/// Floor below which distant geometry never fades; walls stay dimly visible.
pub const FADE_FLOOR: f32 = 0.15;
const FADE_RATE: f32 = 0.25;

/// Exponential light falloff with depth, in [`FADE_FLOOR`, 1].
pub fn depth_fade(depth: f32) -> f32 {
    FADE_FLOOR + (1.0 - FADE_FLOOR) * (-depth.max(0.0) * FADE_RATE).exp()
}

/// Cap the fog approaches; geometry is never fully obscured.
pub const FOG_MAX: f32 = 0.85;
const FOG_RATE: f32 = 0.18;

/// Fog amount rising with depth, in [0, [`FOG_MAX`]).
pub fn fog_amount(depth: f32) -> f32 {
    FOG_MAX * (1.0 - (-depth.max(0.0) * FOG_RATE).exp())
}

const POINT_LIGHT_FALLOFF: f32 = 0.35;

/// Inverse-square-like falloff between a light source and a query point,
/// both expressed as (depth, lateral offset) pairs. 1 at the source.
pub fn point_light(source: (f32, f32), query: (f32, f32)) -> f32 {
    let dz = source.0 - query.0;
    let dx = source.1 - query.1;
    let distance_sq = dz * dz + dx * dx;
    1.0 / (1.0 + distance_sq * POINT_LIGHT_FALLOFF)
}

/// One sampled cell of the first-person sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SweepCell {
    /// Tiles ahead of the camera, >= 1.
    pub depth: i32,
    /// Tiles to the right of the view axis (negative = left).
    pub offset: i32,
    pub world_x: i32,
    pub world_y: i32,
}

/// Enumerates the world cells a first-person frame samples, far-to-near and
/// left-to-right, so drawing in iteration order paints near walls over far
/// ones.
pub fn depth_sweep(
    player_x: i32,
    player_y: i32,
    facing: Facing,
    max_depth: i32,
    half_width: i32,
) -> Vec<SweepCell> {
    let lateral = facing.perpendicular();
    let mut cells = Vec::with_capacity((max_depth * (2 * half_width + 1)) as usize);
    for depth in (1..=max_depth).rev() {
        for offset in -half_width..=half_width {
            cells.push(SweepCell {
                depth,
                offset,
                world_x: player_x + facing.dx * depth + lateral.dx * offset,
                world_y: player_y + facing.dy * depth + lateral.dy * offset,
            });
        }
    }
    cells
}
