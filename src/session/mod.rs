//! Game sessions.
//!
//! ## Layout
//!
//! - `state`: the session value (board, status, clock, allowances, selection)
//! - `action`: player/timer actions and the transitions they produce
//! - `machine`: pure transitions `(state, action) -> state`
//! - `schedule`: cancelable repeating ticker and one-shot deadline
//! - `game`: the orchestrator owning state, RNG, timers and score store
//!
//! Everything is single-threaded. The host feeds wall-clock time through
//! `Game::advance`; nothing runs in the background.

pub mod action;
pub mod game;
pub mod machine;
pub mod schedule;
pub mod state;

pub use action::{Action, Transition};
pub use game::{Fired, Game};
pub use machine::Step;
pub use schedule::{Deadline, RepeatingTask};
pub use state::{SessionState, Status};
