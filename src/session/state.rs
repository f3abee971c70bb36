//! Session state value.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Difficulty, DifficultyConfig, TileId};
use crate::solver::Hint;

/// Where a session is in its lifecycle.
///
/// `Idle → Playing → {Won, Stuck}`, and `Stuck → Playing` after a shuffle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Board dealt, clock not started.
    #[default]
    Idle,
    /// Clock running.
    Playing,
    /// Every tile matched. Terminal.
    Won,
    /// No legal match left; only a shuffle helps.
    Stuck,
}

impl Status {
    /// Is the session over?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Won)
    }
}

/// Everything that changes during one session.
///
/// Transitions never mutate a state in place; they return a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Level being played.
    pub difficulty: Difficulty,

    /// Current tiles.
    pub board: Board,

    pub status: Status,

    /// Seconds on the clock, including shuffle penalties.
    pub elapsed_secs: u32,

    pub shuffles_remaining: u32,

    pub hints_remaining: u32,

    /// The one selected tile, if any.
    pub selection: Option<TileId>,

    pub matched_pairs: u32,

    pub total_pairs: u32,

    /// Hint currently on display.
    pub hint: Option<Hint>,

    /// Leaderboard position once won (1-indexed), `None` if outside the
    /// top entries or not yet won.
    pub rank: Option<usize>,

    /// Seconds added per shuffle.
    pub shuffle_penalty_secs: u32,
}

impl SessionState {
    /// Fresh session over `board` with the allowances from `config`.
    #[must_use]
    pub fn new(board: Board, config: &DifficultyConfig) -> Self {
        let total_pairs = (board.len() / 2) as u32;
        Self {
            difficulty: config.difficulty,
            board,
            status: Status::Idle,
            elapsed_secs: 0,
            shuffles_remaining: config.shuffles,
            hints_remaining: config.hints,
            selection: None,
            matched_pairs: 0,
            total_pairs,
            hint: None,
            rank: None,
            shuffle_penalty_secs: config.shuffle_penalty_secs,
        }
    }

    /// Ids of the tiles the player may select right now.
    #[must_use]
    pub fn free_tiles(&self) -> Vec<TileId> {
        self.board.free_tiles()
    }

    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.selection == Some(id)
    }

    /// Can a shuffle be requested right now?
    #[must_use]
    pub fn can_shuffle(&self) -> bool {
        matches!(self.status, Status::Playing | Status::Stuck) && self.shuffles_remaining > 0
    }

    /// Can a hint be requested right now?
    #[must_use]
    pub fn can_hint(&self) -> bool {
        self.status == Status::Playing && self.hints_remaining > 0
    }
}
