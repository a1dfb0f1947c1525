//! Periodic tick source driven by the UI frame loop.
//!
//! The egui frame rate and the requested sample period are unrelated, so each
//! frame asks the timer how many ticks fell due since the previous frame.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};

/// Upper bound on ticks delivered by a single [`StreamTimer::poll`]. A longer
/// backlog (window minimized, debugger pause) is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

#[derive(Debug, Clone)]
pub struct StreamTimer {
    state: RunState,
    period: Duration,
    next_due: Instant,
}

fn validate_period(period: Duration) -> Result<Duration> {
    if period.is_zero() {
        return Err(StreamError::InvalidConfiguration(
            "update period must be positive".to_string(),
        ));
    }
    Ok(period)
}

impl StreamTimer {
    /// First tick falls due one period after `now`.
    pub fn new(period: Duration, state: RunState, now: Instant) -> Result<Self> {
        let period = validate_period(period)?;
        Ok(Self {
            state,
            period,
            next_due: now + period,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks due at `now`. Always zero while paused.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if !self.state.is_running() {
            return 0;
        }
        let mut ticks = 0;
        while self.next_due <= now && ticks < MAX_CATCH_UP_TICKS {
            ticks += 1;
            self.next_due += self.period;
        }
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        ticks
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    /// Resume; the first tick after resuming comes one full period later.
    pub fn resume(&mut self, now: Instant) {
        if !self.state.is_running() {
            self.state = RunState::Running;
            self.next_due = now + self.period;
        }
    }

    pub fn toggle(&mut self, now: Instant) -> RunState {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(now),
        }
        self.state
    }

    /// Restart the schedule with a new period. The run state is unchanged.
    pub fn set_period(&mut self, period: Duration, now: Instant) -> Result<()> {
        self.period = validate_period(period)?;
        self.next_due = now + self.period;
        Ok(())
    }

    /// Time left until the next tick, `None` while paused.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.state
            .is_running()
            .then(|| self.next_due.saturating_duration_since(now))
    }
}
