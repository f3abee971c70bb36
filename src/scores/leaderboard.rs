//! Ranked list of fastest wins.
//!
//! Entries are kept in ascending `elapsed_secs`. An entry that ties an
//! existing time goes after it, so earlier wins keep their place.
//!
//! ```
//! use rust_mahjong::scores::{EntryId, Leaderboard, NewScore};
//!
//! let mut board = Leaderboard::new();
//! let first = board.next_id();
//! assert_eq!(board.insert(NewScore::at("Asha", 120, 0).into_entry(first)), Some(1));
//!
//! let second = board.next_id();
//! assert_eq!(board.insert(NewScore::at("Ravi", 90, 0).into_entry(second)), Some(1));
//! assert_eq!(board.rank_of(first), Some(2));
//! ```

use serde::{Deserialize, Serialize};

use super::entry::{EntryId, ScoreEntry};

/// Entries kept per difficulty.
pub const MAX_ENTRIES: usize = 10;

/// One difficulty's top entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, restoring order and the size cap.
    ///
    /// The sort is stable, so stored order breaks ties.
    #[must_use]
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by_key(|e| e.elapsed_secs);
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<ScoreEntry> {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// An id not used by any entry on the board.
    #[must_use]
    pub fn next_id(&self) -> EntryId {
        EntryId(self.entries.iter().map(|e| e.id.0 + 1).max().unwrap_or(0))
    }

    /// Insert `entry` and return its 1-indexed rank.
    ///
    /// Returns `None` (and leaves the board unchanged) when the entry
    /// would land outside the top `MAX_ENTRIES`.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let pos = self
            .entries
            .partition_point(|e| e.elapsed_secs <= entry.elapsed_secs);
        if pos >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(pos + 1)
    }

    /// 1-indexed rank of the entry with `id`.
    #[must_use]
    pub fn rank_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id).map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::NewScore;

    fn add(board: &mut Leaderboard, name: &str, secs: u32) -> (EntryId, Option<usize>) {
        let id = board.next_id();
        let rank = board.insert(NewScore::at(name, secs, 0).into_entry(id));
        (id, rank)
    }

    #[test]
    fn test_ascending_order() {
        let mut board = Leaderboard::new();
        add(&mut board, "a", 300);
        add(&mut board, "b", 100);
        add(&mut board, "c", 200);

        let times: Vec<_> = board.entries().iter().map(|e| e.elapsed_secs).collect();
        assert_eq!(times, vec![100, 200, 300]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        let (first, _) = add(&mut board, "a", 100);
        let (second, rank) = add(&mut board, "b", 100);

        assert_eq!(rank, Some(2));
        assert_eq!(board.rank_of(first), Some(1));
        assert_eq!(board.rank_of(second), Some(2));
    }

    #[test]
    fn test_capped_at_ten() {
        let mut board = Leaderboard::new();
        for i in 0..10 {
            add(&mut board, "p", 100 + i * 10);
        }
        assert_eq!(board.len(), MAX_ENTRIES);

        // Middling time pushes the slowest out.
        let (id, rank) = add(&mut board, "mid", 145);
        assert_eq!(rank, Some(6));
        assert_eq!(board.rank_of(id), Some(6));
        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board.entries().last().map(|e| e.elapsed_secs), Some(180));

        // Slowest time is not recorded at all.
        let before = board.clone();
        let (_, rank) = add(&mut board, "slow", 999);
        assert_eq!(rank, None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_tie_with_tenth_is_dropped() {
        let mut board = Leaderboard::new();
        for _ in 0..10 {
            add(&mut board, "p", 100);
        }
        assert_eq!(add(&mut board, "late", 100).1, None);
    }

    #[test]
    fn test_from_entries_sorts_and_trims() {
        let entries: Vec<_> = (0..12u32)
            .rev()
            .map(|i| NewScore::at("p", i, 0).into_entry(EntryId(u64::from(i))))
            .collect();
        let board = Leaderboard::from_entries(entries);

        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board.entries()[0].elapsed_secs, 0);
        assert_eq!(board.entries()[9].elapsed_secs, 9);
        assert_eq!(board.next_id(), EntryId(10));
    }
}
