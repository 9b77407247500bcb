//! Per-frame delta measurement

use std::time::Duration;
use tokio::time::Instant;

/// Monotonic "last timestamp" baseline for a frame loop
///
/// The first frame after construction or [`FrameClock::rebaseline`] yields a
/// zero delta, so time spent paused or between turns is never charged.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous frame, measured at `now`
    pub fn delta(&mut self, now: Instant) -> Duration {
        let delta = match self.last {
            Some(previous) => now.saturating_duration_since(previous),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        self.frames += 1;
        delta
    }

    /// Forget the baseline; the next frame measures from itself
    pub fn rebaseline(&mut self) {
        self.last = None;
    }

    /// Frames measured since construction
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
