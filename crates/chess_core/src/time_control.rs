//! Clock information handed to an engine with each move request.
//!
//! Searches run to their fixed depth and do not consult the budget. It is
//! accepted so callers can pass their clock through unchanged; a time-aware
//! search would check it between sibling moves at the root, never while a
//! move is applied.

use std::time::Duration;

/// Time remaining on the mover's clock, plus the per-move increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBudget {
    /// Time left on the clock (None = untimed game)
    pub remaining: Option<Duration>,
    /// Increment added after each move
    pub increment: Duration,
}

impl TimeBudget {
    /// No clock at all.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// A clock with `remaining` time and no increment.
    pub fn remaining(remaining: Duration) -> Self {
        Self {
            remaining: Some(remaining),
            increment: Duration::ZERO,
        }
    }

    pub fn with_increment(mut self, increment: Duration) -> Self {
        self.increment = increment;
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.remaining.is_none()
    }

    /// Remaining time in milliseconds, as chess GUIs report it.
    pub fn remaining_ms(&self) -> Option<u128> {
        self.remaining.map(|d| d.as_millis())
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
