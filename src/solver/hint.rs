//! First-pair hint search.

use serde::{Deserialize, Serialize};

use crate::core::{Glyph, Tile, TileId};
use crate::rules::free_tiles;

/// A legal pair the player could remove next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    /// Earlier tile in list order.
    pub first: TileId,
    /// Later tile in list order.
    pub second: TileId,
    /// The shared glyph.
    pub glyph: Glyph,
}

impl Hint {
    /// Does the hint point at this tile?
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.first == id || self.second == id
    }

    /// Both tile ids.
    #[must_use]
    pub fn ids(&self) -> [TileId; 2] {
        [self.first, self.second]
    }
}

/// Find the first free pair with equal glyphs.
///
/// Free tiles are taken in list order and scanned pairwise (`i < j`), so the
/// result is deterministic for a given tile list.
pub fn find_hint<'a, I>(tiles: I) -> Option<Hint>
where
    I: IntoIterator<Item = &'a Tile>,
{
    let free = free_tiles(tiles);

    for (i, a) in free.iter().enumerate() {
        if let Some(b) = free[i + 1..].iter().find(|b| b.glyph == a.glyph) {
            return Some(Hint {
                first: a.id,
                second: b.id,
                glyph: a.glyph,
            });
        }
    }

    None
}

/// Does at least one legal match exist?
pub fn has_moves<'a, I>(tiles: I) -> bool
where
    I: IntoIterator<Item = &'a Tile>,
{
    find_hint(tiles).is_some()
}
