//! Leaderboards.
//!
//! Each difficulty keeps its ten fastest wins. The engine only talks to a
//! `ScoreStore`; where the list lives (memory, a JSON file) is up to the
//! store.

mod entry;
mod format;
mod leaderboard;
mod store;

pub use entry::{unix_now, EntryId, NewScore, ScoreEntry};
pub use format::format_time;
pub use leaderboard::{Leaderboard, MAX_ENTRIES};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};
