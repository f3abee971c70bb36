//! # rust-mahjong
//!
//! A tile-matching solitaire engine. Tiles sit on a layered 3D grid; two
//! free tiles showing the same glyph can be removed together, and the game
//! is won when the board is empty.
//!
//! ## Design Principles
//!
//! 1. **Always Solvable Locally**: A dealt or shuffled board always has at
//!    least one legal match. Random deals are retried a bounded number of
//!    times and then repaired by swapping two glyphs.
//!
//! 2. **Pure Transitions**: `SessionState::apply` takes a state and an
//!    action and returns a new state. All side effects (clock, hint expiry,
//!    score storage) live in `Game`.
//!
//! 3. **Deterministic**: Every random choice comes from a seeded `GameRng`,
//!    so a seed reproduces the same deals and shuffles.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: Tiles are held in an `im::Vector`, so taking a
//!   new board after a match is cheap and old states stay valid.
//!
//! - **Host-Driven Time**: No threads or timers. The host calls
//!   `Game::advance(elapsed_ms)` and the engine fires its ticker and hint
//!   deadline from that.
//!
//! ## Modules
//!
//! - `core`: Tile ids, positions, glyphs, RNG, configuration, errors
//! - `layout`: Fixed tile positions per difficulty
//! - `rules`: Free-tile and match checks
//! - `solver`: Hint search and solvability
//! - `board`: Board value, generation and shuffling
//! - `session`: State machine, scheduled tasks, the `Game` orchestrator
//! - `scores`: Leaderboards, score stores, time formatting

pub mod core;
pub mod layout;
pub mod rules;
pub mod solver;
pub mod board;
pub mod session;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    TileId, Position, Tile, Glyph,
    GameRng, GameRngState,
    Difficulty, DifficultyConfig, EngineConfig,
    EngineError, StoreError,
};

pub use crate::board::Board;

pub use crate::solver::Hint;

pub use crate::session::{
    Action, Transition, Game, SessionState, Status,
};

pub use crate::scores::{
    format_time, ScoreEntry, NewScore, EntryId, Leaderboard,
    ScoreStore, MemoryStore, JsonFileStore,
};
