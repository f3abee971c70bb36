//! Hint search and solvability checks.
//!
//! The same scan serves both: the first free matching pair found is the
//! hint shown to the player and the witness that the board is solvable.

mod hint;

pub use hint::{find_hint, has_moves, Hint};
