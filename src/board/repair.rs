//! Deterministic fallback when random deals keep coming out stuck.

use tracing::warn;

use crate::core::EngineError;

use super::tiles::Board;

/// Swap two glyphs so that the first two free tiles form a match.
///
/// With free tiles `A` and `F` and `A`'s twin `B` somewhere else on the
/// board, swapping the glyphs of `B` and `F` gives `F` the same glyph as
/// `A`. The glyph multiset is unchanged, so pairing is preserved.
/// Freedom does not depend on glyphs, so `A` and `F` stay free.
pub(crate) fn force_match(board: &Board) -> Result<Board, EngineError> {
    if board.has_moves() {
        return Ok(board.clone());
    }

    let unmatched = board.unmatched_count();
    let free = board.free_tiles();
    let [a, f] = match free.as_slice() {
        [a, f, ..] => [*a, *f],
        _ => return Err(EngineError::Unsolvable { unmatched }),
    };

    let glyph = board.get(a).map(|t| t.glyph);
    let twin = board
        .active_tiles()
        .find(|t| t.id != a && Some(t.glyph) == glyph)
        .map(|t| t.id)
        .ok_or(EngineError::Unsolvable { unmatched })?;

    warn!(first = %a, second = %f, twin = %twin, "forcing a free match by swapping glyphs");

    board
        .with_swapped_glyphs(twin, f)
        .ok_or(EngineError::Unsolvable { unmatched })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Glyph, Position, TileId};

    fn row_board(glyphs: &[u16]) -> Board {
        let positions: Vec<_> = (0..glyphs.len())
            .map(|i| Position::new(i as f32, 0.0, 0))
            .collect();
        let glyphs: Vec<_> = glyphs.iter().map(|&g| Glyph(g)).collect();
        Board::deal(&positions, &glyphs)
    }

    #[test]
    fn test_repair_creates_free_pair() {
        // Ends are 1 and 2; their twins are buried in the middle.
        let board = row_board(&[1, 2, 1, 2]);
        assert!(!board.has_moves());

        let repaired = force_match(&board).unwrap();
        assert!(repaired.has_moves());
        assert!(repaired.is_perfectly_paired());
        assert_eq!(repaired.glyph_counts(), board.glyph_counts());

        let hint = repaired.find_hint().unwrap();
        assert_eq!(hint.ids(), [TileId(0), TileId(3)]);
    }

    #[test]
    fn test_repair_keeps_solvable_board() {
        let board = row_board(&[1, 2, 2, 1]);
        assert_eq!(force_match(&board).unwrap(), board);
    }

    #[test]
    fn test_stacked_last_pair_is_unsolvable() {
        let board = Board::new([
            crate::core::Tile::new(TileId(0), Position::new(0.0, 0.0, 0), Glyph(1)),
            crate::core::Tile::new(TileId(1), Position::new(0.0, 0.0, 1), Glyph(1)),
        ]);
        assert!(matches!(
            force_match(&board),
            Err(EngineError::Unsolvable { unmatched: 2 })
        ));
    }
}
