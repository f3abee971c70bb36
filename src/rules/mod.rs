//! Board rules: which tiles are selectable and which pairs match.
//!
//! Both checks are pure functions over the current tile list. Matched tiles
//! are ignored everywhere; they neither block nor get selected.

pub mod access;
pub mod matching;

pub use access::{free_tiles, is_free};
pub use matching::can_match;
