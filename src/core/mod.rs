//! Core engine types: tile ids, positions, glyphs, configuration, RNG, errors.
//!
//! Everything else in the crate is built from these pieces. Nothing here
//! knows about sessions or scoring.

pub mod tile;
pub mod glyph;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{Position, Tile, TileId};
pub use glyph::Glyph;
pub use rng::{GameRng, GameRngState};
pub use config::{Difficulty, DifficultyConfig, EngineConfig};
pub use error::{EngineError, StoreError};
