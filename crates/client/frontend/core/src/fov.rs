//! Facing-cone classifier.
//!
//! The cone is a rendering emphasis, not a visibility gate: callers apply it
//! only to cells already rendered as explored-and-visible. Fog decided
//! upstream always wins.
use protocol::Facing;

/// Dot-product threshold for cone membership: 0.5 gives a 120° total arc,
/// 60° to each side of facing.
pub const CONE_DOT_THRESHOLD: f32 = 0.5;

/// Default cone reach in tiles.
pub const DEFAULT_CONE_RADIUS: f32 = 6.0;

/// Whether the cell at `(rel_x, rel_y)` relative to the player lies inside
/// the facing cone.
///
/// The player's own cell is never in cone; it is drawn as the player glyph.
pub fn in_facing_cone(rel_x: i32, rel_y: i32, facing: Facing, max_radius: f32) -> bool {
    if rel_x == 0 && rel_y == 0 {
        return false;
    }

    let distance = ((rel_x * rel_x + rel_y * rel_y) as f32).sqrt();
    if distance > max_radius {
        return false;
    }

    let (fx, fy) = facing.as_unit();
    let dot = (rel_x as f32 / distance) * fx + (rel_y as f32 / distance) * fy;
    dot >= CONE_DOT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_cell_is_never_in_cone() {
        for facing in [Facing::NORTH, Facing::SOUTH, Facing::WEST, Facing::EAST] {
            assert!(!in_facing_cone(0, 0, facing, DEFAULT_CONE_RADIUS));
        }
    }

    #[test]
    fn straight_ahead_is_in_cone_until_the_radius() {
        assert!(in_facing_cone(0, -3, Facing::NORTH, 6.0));
        assert!(in_facing_cone(0, -6, Facing::NORTH, 6.0));
        assert!(!in_facing_cone(0, -7, Facing::NORTH, 6.0));
    }

    #[test]
    fn perpendicular_is_out_of_cone() {
        // dot product 0 < 0.5
        assert!(!in_facing_cone(3, 0, Facing::NORTH, 6.0));
        assert!(!in_facing_cone(-3, 0, Facing::NORTH, 6.0));
    }

    #[test]
    fn diagonal_sits_on_the_wide_side_of_120_degrees() {
        // dot = 1/sqrt(2) ~ 0.707 >= 0.5: a 90° contract would reject this.
        assert!(in_facing_cone(1, -1, Facing::NORTH, 6.0));
        assert!(in_facing_cone(-2, -2, Facing::NORTH, 6.0));
    }

    #[test]
    fn classifier_is_symmetric_under_quarter_rotation() {
        let samples: &[(i32, i32)] = &[
            (0, -3),
            (1, -2),
            (-2, -2),
            (3, 0),
            (2, 2),
            (0, 4),
            (-5, -1),
            (4, -4),
        ];
        let mut facing = Facing::NORTH;
        for _ in 0..4 {
            let rotated_facing = facing.rotated_right();
            for &(x, y) in samples {
                // Same clockwise rotation applied to the relative position.
                let (rx, ry) = (-y, x);
                assert_eq!(
                    in_facing_cone(x, y, facing, DEFAULT_CONE_RADIUS),
                    in_facing_cone(rx, ry, rotated_facing, DEFAULT_CONE_RADIUS),
                    "rotation broke symmetry at ({x},{y}) facing {facing:?}"
                );
            }
            facing = rotated_facing;
        }
    }
}
