//! Tile accessibility.
//!
//! A tile is free when:
//!
//! 1. **Nothing covers it**: no other unmatched tile on a higher layer lies
//!    within one unit in both x and y. This is an overlap test, so tiles on
//!    half-offset layers still cover the cells beneath them.
//! 2. **One side is open**: it is not blocked on both the left and the
//!    right by unmatched tiles on the same layer, in the same row (within
//!    half a unit) and one column over (within half a unit).
//!
//! Rows above and below on the same layer never block.
//!
//! ```
//! use rust_mahjong::core::{Glyph, Position, Tile, TileId};
//! use rust_mahjong::rules::is_free;
//!
//! let row: Vec<Tile> = (0..3)
//!     .map(|i| Tile::new(TileId(i), Position::new(i as f32, 0.0, 0), Glyph(0)))
//!     .collect();
//!
//! assert!(is_free(&row[0], &row));
//! assert!(!is_free(&row[1], &row)); // both sides occupied
//! assert!(is_free(&row[2], &row));
//! ```

use crate::core::Tile;

/// Horizontal reach within which a higher tile covers a lower one.
pub const COVER_REACH: f32 = 1.0;

/// Tolerance for "same row" and "adjacent column" on one layer.
pub const SIDE_REACH: f32 = 0.5;

/// Is `tile` selectable given the rest of the board?
///
/// `tiles` may include `tile` itself and matched tiles; both are skipped.
/// A matched tile is never free.
pub fn is_free<'a, I>(tile: &Tile, tiles: I) -> bool
where
    I: IntoIterator<Item = &'a Tile>,
{
    if tile.matched {
        return false;
    }

    let here = tile.position;
    let mut left_blocked = false;
    let mut right_blocked = false;

    for other in tiles {
        if other.matched || other.id == tile.id {
            continue;
        }
        let there = other.position;

        if there.z > here.z {
            let covers = (there.x - here.x).abs() < COVER_REACH
                && (there.y - here.y).abs() < COVER_REACH;
            if covers {
                return false;
            }
        } else if there.z == here.z && (there.y - here.y).abs() < SIDE_REACH {
            if (there.x - (here.x - 1.0)).abs() < SIDE_REACH {
                left_blocked = true;
            } else if (there.x - (here.x + 1.0)).abs() < SIDE_REACH {
                right_blocked = true;
            }
        }
    }

    !(left_blocked && right_blocked)
}

/// All free tiles, in list order.
pub fn free_tiles<'a, I>(tiles: I) -> Vec<&'a Tile>
where
    I: IntoIterator<Item = &'a Tile>,
{
    let active: Vec<&Tile> = tiles.into_iter().filter(|t| t.is_active()).collect();
    active
        .iter()
        .copied()
        .filter(|t| is_free(t, active.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Glyph, Position, TileId};

    fn tile(id: u32, x: f32, y: f32, z: u8) -> Tile {
        Tile::new(TileId(id), Position::new(x, y, z), Glyph(0))
    }

    #[test]
    fn test_lone_tile_is_free() {
        let tiles = vec![tile(0, 3.0, 3.0, 0)];
        assert!(is_free(&tiles[0], &tiles));
    }

    #[test]
    fn test_covered_tile_is_not_free() {
        let tiles = vec![tile(0, 1.0, 1.0, 0), tile(1, 1.0, 1.0, 1)];
        assert!(!is_free(&tiles[0], &tiles));
        assert!(is_free(&tiles[1], &tiles));
    }

    #[test]
    fn test_partial_overlap_covers() {
        // Half-offset cap still covers the tile below it.
        let tiles = vec![tile(0, 5.0, 2.0, 4), tile(1, 5.5, 2.5, 5)];
        assert!(!is_free(&tiles[0], &tiles));

        // A full unit away does not.
        let tiles = vec![tile(0, 5.0, 2.0, 4), tile(1, 6.0, 2.0, 5)];
        assert!(is_free(&tiles[0], &tiles));
    }

    #[test]
    fn test_both_sides_blocked() {
        let mut tiles = vec![tile(0, 0.0, 0.0, 0), tile(1, 1.0, 0.0, 0), tile(2, 2.0, 0.0, 0)];
        assert!(!is_free(&tiles[1], &tiles));

        tiles[0].matched = true;
        assert!(is_free(&tiles[1], &tiles));
    }

    #[test]
    fn test_vertical_neighbours_do_not_block() {
        let tiles = vec![tile(0, 1.0, 1.0, 0), tile(1, 1.0, 0.0, 0), tile(2, 1.0, 2.0, 0)];
        assert!(is_free(&tiles[0], &tiles));
    }

    #[test]
    fn test_neighbours_on_other_layers_do_not_block_sides() {
        let tiles = vec![tile(0, 1.0, 0.0, 1), tile(1, 0.0, 0.0, 0), tile(2, 2.0, 0.0, 0)];
        assert!(is_free(&tiles[0], &tiles));
    }

    #[test]
    fn test_matched_tile_is_never_free() {
        let mut lone = tile(0, 0.0, 0.0, 0);
        lone.matched = true;
        assert!(!is_free(&lone, std::iter::once(&lone)));
    }

    #[test]
    fn test_free_tiles_in_list_order() {
        let tiles = vec![tile(0, 0.0, 0.0, 0), tile(1, 1.0, 0.0, 0), tile(2, 2.0, 0.0, 0)];
        let ids: Vec<_> = free_tiles(&tiles).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TileId(0), TileId(2)]);
    }
}
