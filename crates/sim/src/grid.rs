use crate::Vec2;

/// Tile convention:
/// - Tile `t` is centered at world coordinate `t * TILE_WIDTH` on each axis.
/// - `world_to_tile` rounds to the nearest tile, ties away from zero, so the
///   mapping is symmetric on both sides of the origin.
pub const TILE_WIDTH: f32 = 8.0;

pub const VISIBLE_TILE_RADIUS_X: i32 = 40;
pub const VISIBLE_TILE_RADIUS_Y: i32 = 30;

pub fn world_to_tile(coord: f32) -> i32 {
    (coord / TILE_WIDTH).round() as i32
}

pub fn tile_to_world(tile: i32) -> f32 {
    tile as f32 * TILE_WIDTH
}

pub fn snap(position: Vec2) -> Vec2 {
    Vec2 {
        x: tile_to_world(world_to_tile(position.x)),
        y: tile_to_world(world_to_tile(position.y)),
    }
}

/// Inclusive tile bounds, used by the presentation layer to draw the ground
/// grid around a world-space center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

pub fn visible_tile_range(center: Vec2) -> TileRect {
    let tile_x = world_to_tile(center.x);
    let tile_y = world_to_tile(center.y);
    TileRect {
        min_x: tile_x - VISIBLE_TILE_RADIUS_X,
        max_x: tile_x + VISIBLE_TILE_RADIUS_X,
        min_y: tile_y - VISIBLE_TILE_RADIUS_Y,
        max_y: tile_y + VISIBLE_TILE_RADIUS_Y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_round_trip_is_identity() {
        for tile in -10_000..=10_000 {
            assert_eq!(world_to_tile(tile_to_world(tile)), tile, "tile={tile}");
        }
    }

    #[test]
    fn world_to_tile_rounds_half_away_from_zero() {
        assert_eq!(world_to_tile(0.0), 0);
        assert_eq!(world_to_tile(3.99), 0);
        assert_eq!(world_to_tile(4.0), 1);
        assert_eq!(world_to_tile(11.99), 1);
        assert_eq!(world_to_tile(12.0), 2);
        assert_eq!(world_to_tile(-3.99), 0);
        assert_eq!(world_to_tile(-4.0), -1);
        assert_eq!(world_to_tile(-12.0), -2);
    }

    #[test]
    fn snap_aligns_each_axis_independently() {
        let snapped = snap(Vec2 { x: 10.0, y: -3.0 });
        assert_eq!(snapped, Vec2 { x: 8.0, y: 0.0 });

        let snapped = snap(Vec2 { x: -13.0, y: 20.0 });
        assert_eq!(snapped, Vec2 { x: -16.0, y: 24.0 });
    }

    #[test]
    fn snap_is_idempotent() {
        let once = snap(Vec2 { x: 37.3, y: -81.9 });
        assert_eq!(snap(once), once);
    }

    #[test]
    fn visible_tile_range_is_centered_on_the_query_tile() {
        let rect = visible_tile_range(Vec2 { x: 20.0, y: -20.0 });
        assert_eq!(
            rect,
            TileRect {
                min_x: 3 - VISIBLE_TILE_RADIUS_X,
                max_x: 3 + VISIBLE_TILE_RADIUS_X,
                min_y: -3 - VISIBLE_TILE_RADIUS_Y,
                max_y: -3 + VISIBLE_TILE_RADIUS_Y,
            }
        );
    }
}
