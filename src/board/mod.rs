//! Boards: the tile list for one session, plus the two operations that
//! assign glyphs to it.
//!
//! - `generate`: deal a fresh, solvable board for a difficulty
//! - `shuffle`: re-deal the glyphs of the unmatched tiles, keeping it solvable
//!
//! Both retry a bounded number of times and then fall back to a
//! deterministic repair that swaps two glyphs to create a free pair.

mod generate;
mod repair;
mod shuffle;
mod tiles;

pub use generate::{generate, glyph_pairs};
pub use shuffle::shuffle;
pub use tiles::Board;
