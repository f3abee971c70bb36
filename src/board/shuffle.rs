//! Re-dealing the glyphs of the tiles still in play.

use tracing::debug;

use crate::core::{EngineError, GameRng, Glyph};

use super::repair::force_match;
use super::tiles::Board;

/// Permute the glyphs of unmatched tiles until a legal match exists.
///
/// Ids, positions, list order and matched tiles are untouched. With one or
/// zero unmatched tiles there is nothing to do and the board is returned
/// as is. After `max_attempts` stuck permutations (at least one is tried)
/// the last one is repaired; if even that is impossible the error is
/// returned and the caller keeps its old board.
pub fn shuffle(board: &Board, rng: &mut GameRng, max_attempts: usize) -> Result<Board, EngineError> {
    let slots: Vec<usize> = board
        .tiles()
        .enumerate()
        .filter(|(_, t)| t.is_active())
        .map(|(i, _)| i)
        .collect();

    if slots.len() <= 1 {
        return Ok(board.clone());
    }

    let mut glyphs: Vec<Glyph> = board.active_tiles().map(|t| t.glyph).collect();

    let mut candidate = board.clone();
    for attempt in 1..=max_attempts.max(1) {
        rng.shuffle(&mut glyphs);
        candidate = board.with_glyphs(&slots, &glyphs);
        if candidate.has_moves() {
            debug!(attempt, unmatched = slots.len(), "shuffled board");
            return Ok(candidate);
        }
    }

    debug!(max_attempts, unmatched = slots.len(), "no solvable shuffle, repairing");
    force_match(&candidate)
}
