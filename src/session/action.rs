//! Actions and transitions.
//!
//! An `Action` is something the player or the clock asks for. A
//! `Transition` reports what the engine did with it. Invalid actions are
//! not errors; they come back as `Transition::Ignored`.

use serde::{Deserialize, Serialize};

use crate::core::TileId;
use crate::solver::Hint;

/// An input to the session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The player clicked a tile.
    Click(TileId),
    /// The player asked for a shuffle.
    Shuffle,
    /// The player asked for a hint.
    Hint,
    /// The hint display deadline passed.
    ClearHint,
    /// One clock tick elapsed.
    Tick,
}

/// What an action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Nothing changed (apart from possibly leaving `Idle`).
    Ignored,
    /// A tile became the selection.
    Selected(TileId),
    /// The selected tile was clicked again.
    Deselected(TileId),
    /// A non-matching free tile replaced the selection.
    Reselected { from: TileId, to: TileId },
    /// Two tiles were removed.
    Matched { first: TileId, second: TileId },
    /// The last two tiles were removed.
    Won { first: TileId, second: TileId },
    /// Unmatched glyphs were re-dealt.
    Shuffled,
    /// A hint is now on display.
    HintShown(Hint),
    /// The hint display ended.
    HintCleared,
    /// The clock advanced one second.
    Ticked,
}

impl Transition {
    /// Did the board itself change?
    #[must_use]
    pub const fn mutates_board(&self) -> bool {
        matches!(
            self,
            Transition::Matched { .. } | Transition::Won { .. } | Transition::Shuffled
        )
    }

    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutates_board() {
        assert!(Transition::Shuffled.mutates_board());
        assert!(Transition::Won { first: TileId(0), second: TileId(1) }.mutates_board());
        assert!(!Transition::Selected(TileId(0)).mutates_board());
        assert!(!Transition::Ticked.mutates_board());
    }

    #[test]
    fn test_serialization() {
        let action = Action::Click(TileId(12));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
