//! Score storage.
//!
//! The engine records a win through `ScoreStore::append_and_rank` and
//! reads lists back through `load_ranked`. Two stores ship with the crate:
//!
//! - `MemoryStore`: lives as long as the process
//! - `JsonFileStore`: one pretty-printed JSON array per difficulty

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Difficulty, StoreError};

use super::entry::{NewScore, ScoreEntry};
use super::leaderboard::Leaderboard;

/// Where leaderboards live.
pub trait ScoreStore {
    /// Entries for `difficulty`, fastest first.
    fn load_ranked(&self, difficulty: Difficulty) -> Result<Vec<ScoreEntry>, StoreError>;

    /// Record `score` and return its 1-indexed rank, or `None` if it did
    /// not make the list.
    fn append_and_rank(
        &mut self,
        difficulty: Difficulty,
        score: NewScore,
    ) -> Result<Option<usize>, StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn load_ranked(&self, difficulty: Difficulty) -> Result<Vec<ScoreEntry>, StoreError> {
        (**self).load_ranked(difficulty)
    }

    fn append_and_rank(
        &mut self,
        difficulty: Difficulty,
        score: NewScore,
    ) -> Result<Option<usize>, StoreError> {
        (**self).append_and_rank(difficulty, score)
    }
}

/// In-process leaderboards.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    boards: FxHashMap<Difficulty, Leaderboard>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load_ranked(&self, difficulty: Difficulty) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(self
            .boards
            .get(&difficulty)
            .map(|b| b.entries().to_vec())
            .unwrap_or_default())
    }

    fn append_and_rank(
        &mut self,
        difficulty: Difficulty,
        score: NewScore,
    ) -> Result<Option<usize>, StoreError> {
        let board = self.boards.entry(difficulty).or_default();
        let id = board.next_id();
        Ok(board.insert(score.into_entry(id)))
    }
}

/// Leaderboards stored as `leaderboard-<key>.json` under a directory.
///
/// A missing file reads as an empty list. The directory is created on
/// first write.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `difficulty`.
    #[must_use]
    pub fn path_for(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(format!("leaderboard-{}.json", difficulty.key()))
    }

    fn read(&self, difficulty: Difficulty) -> Result<Leaderboard, StoreError> {
        let path = self.path_for(difficulty);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Leaderboard::new()),
            Err(err) => return Err(err.into()),
        };
        let entries: Vec<ScoreEntry> = serde_json::from_str(&text)?;
        Ok(Leaderboard::from_entries(entries))
    }

    fn write(&self, difficulty: Difficulty, board: &Leaderboard) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(difficulty);
        let json = serde_json::to_string_pretty(board)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), entries = board.len(), "leaderboard written");
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn load_ranked(&self, difficulty: Difficulty) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(self.read(difficulty)?.into_entries())
    }

    fn append_and_rank(
        &mut self,
        difficulty: Difficulty,
        score: NewScore,
    ) -> Result<Option<usize>, StoreError> {
        let mut board = self.read(difficulty)?;
        let id = board.next_id();
        let rank = board.insert(score.into_entry(id));
        if rank.is_some() {
            self.write(difficulty, &board)?;
        }
        Ok(rank)
    }
}
