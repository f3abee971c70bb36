//! Score entries.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Identifier a store assigns to an entry when it is inserted.
///
/// Ranking looks entries up by this id, never by their field values, so two
/// identical scores recorded in the same second still rank correctly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// A recorded win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: EntryId,
    /// Player name.
    pub name: String,
    /// Completion time.
    pub elapsed_secs: u32,
    /// Unix seconds when the win was recorded.
    pub timestamp: u64,
}

/// A win waiting to be recorded; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewScore {
    pub name: String,
    pub elapsed_secs: u32,
    pub timestamp: u64,
}

impl NewScore {
    /// A score stamped with the current time.
    pub fn now(name: impl Into<String>, elapsed_secs: u32) -> Self {
        Self::at(name, elapsed_secs, unix_now())
    }

    /// A score with an explicit timestamp.
    pub fn at(name: impl Into<String>, elapsed_secs: u32, timestamp: u64) -> Self {
        Self {
            name: name.into(),
            elapsed_secs,
            timestamp,
        }
    }

    /// Attach the id chosen by the store.
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> ScoreEntry {
        ScoreEntry {
            id,
            name: self.name,
            elapsed_secs: self.elapsed_secs,
            timestamp: self.timestamp,
        }
    }
}

/// Seconds since the Unix epoch (0 if the clock is before it).
#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
