//! The board value.
//!
//! Tiles live in an `im::Vector`, so producing the next board after a
//! match or a shuffle shares structure with the previous one instead of
//! copying 144 tiles.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Glyph, Position, Tile, TileId};
use crate::rules;
use crate::solver::{self, Hint};

/// Ordered collection of tiles for one session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<Tile>,
}

impl Board {
    /// Build a board from tiles, keeping their order.
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Pair positions with glyphs in order. Ids are assigned `0..n`.
    ///
    /// Extra positions or glyphs beyond the shorter list are ignored.
    #[must_use]
    pub fn deal(positions: &[Position], glyphs: &[Glyph]) -> Self {
        Self::new(
            positions
                .iter()
                .zip(glyphs)
                .enumerate()
                .map(|(i, (&position, &glyph))| Tile::new(TileId(i as u32), position, glyph)),
        )
    }

    /// Number of tiles, matched or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles in list order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Iterate over unmatched tiles in list order.
    pub fn active_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|t| t.is_active())
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    /// Tiles still on the board.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.active_tiles().count()
    }

    /// Tiles already removed.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.len() - self.unmatched_count()
    }

    /// True once every tile of a non-empty board has been matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        !self.is_empty() && self.tiles.iter().all(|t| t.matched)
    }

    /// Is the tile with this id selectable? Unknown ids are not.
    #[must_use]
    pub fn is_free(&self, id: TileId) -> bool {
        self.get(id)
            .is_some_and(|tile| rules::is_free(tile, self.tiles.iter()))
    }

    /// Ids of all free tiles, in list order.
    #[must_use]
    pub fn free_tiles(&self) -> Vec<TileId> {
        rules::free_tiles(self.tiles.iter())
            .into_iter()
            .map(|t| t.id)
            .collect()
    }

    /// Can these two tiles be removed together right now?
    #[must_use]
    pub fn can_match(&self, a: TileId, b: TileId) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(a), Some(b)) => {
                let all: Vec<&Tile> = self.tiles.iter().collect();
                rules::can_match(a, b, all.iter().copied())
            }
            _ => false,
        }
    }

    /// First legal pair, if any.
    #[must_use]
    pub fn find_hint(&self) -> Option<Hint> {
        solver::find_hint(self.tiles.iter())
    }

    /// Does at least one legal match exist?
    #[must_use]
    pub fn has_moves(&self) -> bool {
        solver::has_moves(self.tiles.iter())
    }

    /// The board after removing `a` and `b`, or `None` if they are not a
    /// legal match. Both tiles flip together or neither does.
    #[must_use]
    pub fn with_matched(&self, a: TileId, b: TileId) -> Option<Board> {
        if !self.can_match(a, b) {
            return None;
        }
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);

        let mut next = self.clone();
        for i in [ia, ib] {
            let mut tile = next.tiles[i];
            tile.matched = true;
            next.tiles.set(i, tile);
        }
        Some(next)
    }

    /// The board with `glyphs[k]` written to the tile at list index `slots[k]`.
    pub(crate) fn with_glyphs(&self, slots: &[usize], glyphs: &[Glyph]) -> Board {
        let mut next = self.clone();
        for (&i, &glyph) in slots.iter().zip(glyphs) {
            let mut tile = next.tiles[i];
            tile.glyph = glyph;
            next.tiles.set(i, tile);
        }
        next
    }

    /// Swap the glyphs of two tiles.
    pub(crate) fn with_swapped_glyphs(&self, a: TileId, b: TileId) -> Option<Board> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        let (ga, gb) = (self.tiles[ia].glyph, self.tiles[ib].glyph);
        Some(self.with_glyphs(&[ia, ib], &[gb, ga]))
    }

    /// How many tiles carry each glyph.
    #[must_use]
    pub fn glyph_counts(&self) -> FxHashMap<Glyph, usize> {
        let mut counts = FxHashMap::default();
        for tile in &self.tiles {
            *counts.entry(tile.glyph).or_insert(0) += 1;
        }
        counts
    }

    /// Does every glyph appear an even number of times?
    #[must_use]
    pub fn is_perfectly_paired(&self) -> bool {
        self.glyph_counts().values().all(|&n| n % 2 == 0)
    }
}

impl FromIterator<Tile> for Board {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(glyphs: &[u16]) -> Board {
        let positions: Vec<_> = (0..glyphs.len())
            .map(|i| Position::new(i as f32, 0.0, 0))
            .collect();
        let glyphs: Vec<_> = glyphs.iter().map(|&g| Glyph(g)).collect();
        Board::deal(&positions, &glyphs)
    }

    #[test]
    fn test_deal_assigns_sequential_ids() {
        let board = row(&[1, 2, 2, 1]);
        let ids: Vec<_> = board.tiles().map(|t| t.id).collect();
        assert_eq!(ids, vec![TileId(0), TileId(1), TileId(2), TileId(3)]);
        assert_eq!(board.unmatched_count(), 4);
        assert!(!board.is_cleared());
    }

    #[test]
    fn test_free_tiles_on_a_row() {
        let board = row(&[1, 2, 2, 1]);
        assert_eq!(board.free_tiles(), vec![TileId(0), TileId(3)]);
        assert!(board.is_free(TileId(0)));
        assert!(!board.is_free(TileId(1)));
        assert!(!board.is_free(TileId(99)));
    }

    #[test]
    fn test_with_matched_commits_both() {
        let board = row(&[1, 2, 2, 1]);
        let next = board.with_matched(TileId(0), TileId(3)).unwrap();

        assert!(next.get(TileId(0)).unwrap().matched);
        assert!(next.get(TileId(3)).unwrap().matched);
        assert_eq!(next.matched_count(), 2);
        // Original is untouched.
        assert_eq!(board.matched_count(), 0);

        // Inner pair is now reachable.
        assert!(next.can_match(TileId(1), TileId(2)));
        let done = next.with_matched(TileId(1), TileId(2)).unwrap();
        assert!(done.is_cleared());
    }

    #[test]
    fn test_with_matched_rejects_illegal_pairs() {
        let board = row(&[1, 2, 2, 1]);
        assert!(board.with_matched(TileId(1), TileId(2)).is_none());
        assert!(board.with_matched(TileId(0), TileId(0)).is_none());
        assert!(board.with_matched(TileId(0), TileId(42)).is_none());
    }

    #[test]
    fn test_swapped_glyphs() {
        let board = row(&[1, 2, 2, 1]);
        let next = board.with_swapped_glyphs(TileId(0), TileId(1)).unwrap();
        assert_eq!(next.get(TileId(0)).unwrap().glyph, Glyph(2));
        assert_eq!(next.get(TileId(1)).unwrap().glyph, Glyph(1));
        assert!(next.is_perfectly_paired());
    }

    #[test]
    fn test_glyph_counts() {
        let board = row(&[1, 2, 2, 1, 1, 1]);
        let counts = board.glyph_counts();
        assert_eq!(counts[&Glyph(1)], 4);
        assert_eq!(counts[&Glyph(2)], 2);
        assert!(board.is_perfectly_paired());
        assert!(!row(&[1, 2]).is_perfectly_paired());
    }

    #[test]
    fn test_empty_board_is_not_cleared() {
        let board = Board::default();
        assert!(board.is_empty());
        assert!(!board.is_cleared());
        assert!(!board.has_moves());
    }
}
