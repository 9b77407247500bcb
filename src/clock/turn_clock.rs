//! Two-sided chess clock with per-move increment

use std::time::Duration;
use tracing::{debug, info};

use super::Side;

/// Session settings for a [`TurnClock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeControl {
    pub base: Duration,
    pub increment: Duration,
    /// Side activated by the first `start()` of a session
    pub first_to_move: Side,
}

impl TimeControl {
    pub fn new(base: Duration, increment: Duration) -> Self {
        Self {
            base,
            increment,
            first_to_move: Side::White,
        }
    }

    /// Build from whole minutes and whole seconds, the units the selectors use
    pub fn from_minutes(base_minutes: u64, increment_seconds: u64) -> Self {
        Self::new(
            Duration::from_secs(base_minutes * 60),
            Duration::from_secs(increment_seconds),
        )
    }

    pub fn with_first_to_move(mut self, side: Side) -> Self {
        self.first_to_move = side;
        self
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::from_minutes(5, 0)
    }
}

/// Result of `start()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// No side was active; the first mover now runs
    Started(Side),
    /// A paused session continues with the same side
    Resumed(Side),
    /// A side is depleted; only reset or configure can clear this
    Done,
}

/// Result of `switch_turn()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    NotRunning,
    AlreadyActive,
    Switched {
        from: Option<Side>,
        to: Side,
        /// Increment added to `from`
        credited: Duration,
    },
}

impl SwitchOutcome {
    /// Whether the frame baseline has to restart at this instant
    pub fn switched(&self) -> bool {
        matches!(self, SwitchOutcome::Switched { .. })
    }
}

/// Result of `tick()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Counting { side: Side, remaining: Duration },
    /// The active side reached zero on this tick and the clock stopped
    Depleted(Side),
}

/// Chess clock state machine
///
/// The clock never reads time itself. A frame driver measures the delta
/// between display refreshes and feeds it to [`TurnClock::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnClock {
    white_remaining: Duration,
    black_remaining: Duration,
    active_side: Option<Side>,
    running: bool,
    base_duration: Duration,
    increment_per_move: Duration,
    first_to_move: Side,
}

impl TurnClock {
    pub fn new(control: TimeControl) -> Self {
        Self {
            white_remaining: control.base,
            black_remaining: control.base,
            active_side: None,
            running: false,
            base_duration: control.base,
            increment_per_move: control.increment,
            first_to_move: control.first_to_move,
        }
    }

    /// Load a new base and increment; both sides restart from the new base
    pub fn configure(&mut self, base_duration: Duration, increment_per_move: Duration) {
        info!(
            "Configuring chess clock: base={}s increment={}s",
            base_duration.as_secs(),
            increment_per_move.as_secs()
        );
        self.base_duration = base_duration;
        self.increment_per_move = increment_per_move;
        self.reset();
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.is_done() {
            debug!("Start ignored: a side is depleted");
            return StartOutcome::Done;
        }

        self.running = true;
        match self.active_side {
            Some(side) => StartOutcome::Resumed(side),
            None => {
                self.active_side = Some(self.first_to_move);
                StartOutcome::Started(self.first_to_move)
            }
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.active_side = None;
        self.white_remaining = self.base_duration;
        self.black_remaining = self.base_duration;
    }

    /// Hand the turn to `target`, crediting the increment to the side that moved
    pub fn switch_turn(&mut self, target: Side) -> SwitchOutcome {
        if !self.running {
            return SwitchOutcome::NotRunning;
        }
        if self.active_side == Some(target) {
            return SwitchOutcome::AlreadyActive;
        }

        let from = self.active_side;
        let mut credited = Duration::ZERO;
        if let Some(previous) = from {
            if !self.increment_per_move.is_zero() {
                credited = self.increment_per_move;
                *self.remaining_mut(previous) += credited;
            }
        }

        self.active_side = Some(target);
        SwitchOutcome::Switched { from, to: target, credited }
    }

    /// Subtract one frame's worth of time from the active side, floored at zero
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        let side = match (self.running, self.active_side) {
            (true, Some(side)) => side,
            _ => return TickOutcome::Idle,
        };

        let remaining = self.remaining_mut(side);
        *remaining = remaining.saturating_sub(delta);
        let remaining = *remaining;

        if remaining.is_zero() {
            info!("{} clock depleted", side.label());
            self.running = false;
            TickOutcome::Depleted(side)
        } else {
            TickOutcome::Counting { side, remaining }
        }
    }

    pub fn remaining(&self, side: Side) -> Duration {
        match side {
            Side::White => self.white_remaining,
            Side::Black => self.black_remaining,
        }
    }

    fn remaining_mut(&mut self, side: Side) -> &mut Duration {
        match side {
            Side::White => &mut self.white_remaining,
            Side::Black => &mut self.black_remaining,
        }
    }

    pub fn active_side(&self) -> Option<Side> {
        self.active_side
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_depleted(&self, side: Side) -> bool {
        self.remaining(side).is_zero()
    }

    /// Either side has run out of time
    pub fn is_done(&self) -> bool {
        Side::ALL.iter().any(|&side| self.is_depleted(side))
    }

    pub fn base_duration(&self) -> Duration {
        self.base_duration
    }

    pub fn increment(&self) -> Duration {
        self.increment_per_move
    }

    pub fn first_to_move(&self) -> Side {
        self.first_to_move
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(TimeControl::default())
    }
}
