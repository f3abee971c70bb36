//! Cancelable scheduled tasks driven by elapsed milliseconds.
//!
//! The game owns one `RepeatingTask` (the clock) and one `Deadline` (hint
//! expiry). Neither runs on its own: `advance` is called with the time
//! that passed and reports how often the task fired.

use serde::{Deserialize, Serialize};

/// A repeating task with a fixed interval.
///
/// ```
/// use rust_mahjong::session::RepeatingTask;
///
/// let mut ticker = RepeatingTask::new(1000);
/// assert_eq!(ticker.advance(5000), 0); // not started
///
/// ticker.start();
/// assert_eq!(ticker.advance(2500), 2);
/// assert_eq!(ticker.advance(500), 1);
///
/// ticker.cancel();
/// assert_eq!(ticker.advance(10_000), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatingTask {
    interval_ms: u32,
    pending_ms: u32,
    running: bool,
}

impl RepeatingTask {
    /// Create a stopped task. A zero interval is treated as 1 ms.
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            pending_ms: 0,
            running: false,
        }
    }

    /// Start the task. Starting a running task keeps its phase.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.pending_ms = 0;
        }
    }

    /// Stop the task and drop any partial interval.
    pub fn cancel(&mut self) {
        self.running = false;
        self.pending_ms = 0;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Let `elapsed_ms` pass. Returns the number of times the task fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        let total = u64::from(self.pending_ms) + u64::from(elapsed_ms);
        let interval = u64::from(self.interval_ms);
        self.pending_ms = (total % interval) as u32;
        (total / interval) as u32
    }
}

/// A one-shot task that fires once its delay has passed.
///
/// Arming replaces any pending deadline, so an older deadline can never
/// fire after a newer one was set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    remaining_ms: Option<u32>,
}

impl Deadline {
    /// Create an unarmed deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire after `delay_ms`, replacing any pending deadline.
    pub fn arm(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Milliseconds until the deadline fires.
    #[must_use]
    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Let `elapsed_ms` pass. Returns true exactly once, when the deadline
    /// is reached; the deadline is then disarmed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(remaining) if elapsed_ms >= remaining => {
                self.remaining_ms = None;
                true
            }
            Some(remaining) => {
                self.remaining_ms = Some(remaining - elapsed_ms);
                false
            }
            None => false,
        }
    }
}
