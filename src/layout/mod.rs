//! Tile layouts.
//!
//! Each difficulty has a fixed, deterministic set of grid positions. Layouts
//! carry no game state; the board generator fills them with glyphs.

mod shapes;

pub use shapes::{flat, layout_for, layout_for_key, pyramid, two_tier};
