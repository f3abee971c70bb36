//! Tiles and their placement on the 3D grid.
//!
//! ## Coordinates
//!
//! `x` and `y` are grid units and may be half-integers (upper layers are
//! centered over the one below). `z` is the stacking layer, 0 = lowest.
//! Geometry checks always use a tolerance, never exact float equality.
//!
//! ```
//! use rust_mahjong::core::{Glyph, Position, Tile, TileId};
//!
//! let tile = Tile::new(TileId(0), Position::new(5.5, 2.5, 5), Glyph(3));
//! assert!(!tile.matched);
//! assert_eq!(tile.position.z, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::glyph::Glyph;

/// Stable identifier for a tile within one board.
///
/// Assigned at generation in list order and never reused while the board lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A slot on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Column, possibly fractional.
    pub x: f32,
    /// Row, possibly fractional.
    pub y: f32,
    /// Layer (0 = bottom).
    pub z: u8,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: u8) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A single tile on the board.
///
/// `id` and `position` never change. `glyph` is only rewritten by the
/// shuffle operator. `matched` flips to true once and stays there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub position: Position,
    pub glyph: Glyph,
    pub matched: bool,
}

impl Tile {
    /// Create an unmatched tile.
    #[must_use]
    pub const fn new(id: TileId, position: Position, glyph: Glyph) -> Self {
        Self {
            id,
            position,
            glyph,
            matched: false,
        }
    }

    /// Is this tile still on the board?
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.matched
    }
}
