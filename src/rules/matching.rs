//! Match validation.

use crate::core::Tile;

use super::access::is_free;

/// Can `a` and `b` be removed together?
///
/// Requires two distinct unmatched tiles with the same glyph, each free
/// against the current tiles. Symmetric in `a` and `b`.
pub fn can_match<'a, I>(a: &Tile, b: &Tile, tiles: I) -> bool
where
    I: IntoIterator<Item = &'a Tile>,
    I::IntoIter: Clone,
{
    if a.id == b.id || a.glyph != b.glyph || a.matched || b.matched {
        return false;
    }
    let tiles = tiles.into_iter();
    is_free(a, tiles.clone()) && is_free(b, tiles)
}
