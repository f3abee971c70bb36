//! Session transitions.
//!
//! `SessionState::apply` is the whole state machine. It never mutates the
//! input state, so every transition can be tested as a plain function.
//! Randomness (for shuffles) comes in through the `GameRng` argument.

use tracing::warn;

use crate::board;
use crate::core::{GameRng, TileId};

use super::action::{Action, Transition};
use super::state::{SessionState, Status};

/// Result of applying one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// The state after the action.
    pub state: SessionState,
    /// What happened.
    pub transition: Transition,
}

impl Step {
    fn new(state: SessionState, transition: Transition) -> Self {
        Self { state, transition }
    }
}

impl SessionState {
    /// Apply `action` and return the next state.
    ///
    /// `max_attempts` bounds the random re-deals tried by a shuffle.
    #[must_use]
    pub fn apply(&self, action: &Action, rng: &mut GameRng, max_attempts: usize) -> Step {
        let next = self.clone();
        match *action {
            Action::Click(id) => next.click(id),
            Action::Shuffle => next.shuffle(rng, max_attempts),
            Action::Hint => next.show_hint(),
            Action::ClearHint => next.clear_hint(),
            Action::Tick => next.tick(),
        }
    }

    fn click(mut self, id: TileId) -> Step {
        if self.status.is_terminal() {
            return Step::new(self, Transition::Ignored);
        }
        if self.status == Status::Idle {
            self.status = Status::Playing;
        }
        if !self.board.is_free(id) {
            return Step::new(self, Transition::Ignored);
        }

        let transition = match self.selection {
            None => {
                self.selection = Some(id);
                Transition::Selected(id)
            }
            Some(selected) if selected == id => {
                self.selection = None;
                Transition::Deselected(id)
            }
            Some(selected) => match self.board.with_matched(selected, id) {
                Some(board) => {
                    self.board = board;
                    self.selection = None;
                    self.matched_pairs += 1;
                    self.hint = None;
                    if self.board.is_cleared() {
                        self.status = Status::Won;
                        Transition::Won {
                            first: selected,
                            second: id,
                        }
                    } else {
                        self.refresh_stuck();
                        Transition::Matched {
                            first: selected,
                            second: id,
                        }
                    }
                }
                None => {
                    self.selection = Some(id);
                    Transition::Reselected {
                        from: selected,
                        to: id,
                    }
                }
            },
        };

        Step::new(self, transition)
    }

    fn shuffle(mut self, rng: &mut GameRng, max_attempts: usize) -> Step {
        if !self.can_shuffle() {
            return Step::new(self, Transition::Ignored);
        }

        match board::shuffle(&self.board, rng, max_attempts) {
            Ok(board) => {
                self.board = board;
                self.shuffles_remaining -= 1;
                self.selection = None;
                self.hint = None;
                self.elapsed_secs = self.elapsed_secs.saturating_add(self.shuffle_penalty_secs);
                self.status = Status::Playing;
                self.refresh_stuck();
                Step::new(self, Transition::Shuffled)
            }
            Err(err) => {
                warn!(error = %err, "shuffle request dropped");
                Step::new(self, Transition::Ignored)
            }
        }
    }

    fn show_hint(mut self) -> Step {
        if !self.can_hint() {
            return Step::new(self, Transition::Ignored);
        }
        match self.board.find_hint() {
            Some(hint) => {
                self.hint = Some(hint);
                self.hints_remaining -= 1;
                Step::new(self, Transition::HintShown(hint))
            }
            None => Step::new(self, Transition::Ignored),
        }
    }

    fn clear_hint(mut self) -> Step {
        if self.hint.take().is_some() {
            Step::new(self, Transition::HintCleared)
        } else {
            Step::new(self, Transition::Ignored)
        }
    }

    fn tick(mut self) -> Step {
        if self.status != Status::Playing {
            return Step::new(self, Transition::Ignored);
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        Step::new(self, Transition::Ticked)
    }

    /// After a board mutation: no legal match left means stuck.
    fn refresh_stuck(&mut self) {
        if self.status != Status::Won && !self.board.has_moves() {
            self.status = Status::Stuck;
        }
    }
}
