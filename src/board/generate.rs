//! Dealing a new board.

use tracing::debug;

use crate::core::{DifficultyConfig, EngineError, GameRng, Glyph};
use crate::layout::layout_for;

use super::repair::force_match;
use super::tiles::Board;

/// Glyph multiset for `pairs` pairs, cycling through `alphabet`.
///
/// Each base glyph is pushed twice in a row; when `pairs` exceeds the
/// alphabet the cycle wraps and a glyph owns several pairs.
#[must_use]
pub fn glyph_pairs(alphabet: &[Glyph], pairs: usize) -> Vec<Glyph> {
    if alphabet.is_empty() {
        return Vec::new();
    }
    (0..pairs)
        .flat_map(|i| {
            let glyph = alphabet[i % alphabet.len()];
            [glyph, glyph]
        })
        .collect()
}

/// Deal a solvable board for `config`.
///
/// Positions come from the difficulty's layout, truncated to the configured
/// tile count. Glyphs are shuffled and dealt up to `max_attempts` times
/// (at least once); if no deal has a legal match the last one is repaired.
pub fn generate(
    config: &DifficultyConfig,
    rng: &mut GameRng,
    max_attempts: usize,
) -> Result<Board, EngineError> {
    config.validate()?;

    let layout = layout_for(config.difficulty);
    let pairs = layout.len().min(config.tile_count) / 2;
    let positions = &layout[..pairs * 2];
    let mut glyphs = glyph_pairs(&config.alphabet, pairs);

    let mut board = Board::default();
    for attempt in 1..=max_attempts.max(1) {
        rng.shuffle(&mut glyphs);
        board = Board::deal(positions, &glyphs);
        if board.has_moves() {
            debug!(difficulty = %config.difficulty, attempt, tiles = board.len(), "dealt board");
            return Ok(board);
        }
    }

    debug!(difficulty = %config.difficulty, max_attempts, "no solvable deal, repairing");
    force_match(&board)
}
