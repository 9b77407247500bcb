//! Stopwatch with a short lap history

use std::{collections::VecDeque, time::Duration};
use tokio::time::Instant;

/// Laps kept, newest first
pub const MAX_LAPS: usize = 5;

/// A recorded lap as shown in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    pub number: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    resumed_at: Option<Instant>,
    laps: VecDeque<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(now);
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.accumulated += now.saturating_duration_since(resumed_at);
        }
    }

    /// Start or pause; returns the new running flag
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
        self.is_running()
    }

    /// Record the current elapsed time; only while running
    pub fn lap(&mut self, now: Instant) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed = self.elapsed(now);
        self.laps.push_front(elapsed);
        self.laps.truncate(MAX_LAPS);
        Some(elapsed)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.resumed_at = None;
        self.laps.clear();
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self.accumulated + now.saturating_duration_since(resumed_at),
            None => self.accumulated,
        }
    }

    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    /// Laps newest first; the newest carries the highest number
    pub fn laps(&self) -> impl Iterator<Item = Lap> + '_ {
        let count = self.laps.len();
        self.laps
            .iter()
            .enumerate()
            .map(move |(i, &elapsed)| Lap { number: count - i, elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn accumulates_across_pauses() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start(t0);
        watch.pause(t0 + secs(3));
        assert_eq!(watch.elapsed(t0 + secs(100)), secs(3));

        watch.start(t0 + secs(10));
        assert_eq!(watch.elapsed(t0 + secs(12)), secs(5));
    }

    #[test]
    fn start_twice_keeps_first_instant() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start(t0);
        watch.start(t0 + secs(4));
        assert_eq!(watch.elapsed(t0 + secs(5)), secs(5));
    }

    #[test]
    fn laps_only_while_running_and_capped() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        assert_eq!(watch.lap(t0), None);

        watch.start(t0);
        for i in 1..=7 {
            watch.lap(t0 + secs(i));
        }

        let laps: Vec<Lap> = watch.laps().collect();
        assert_eq!(laps.len(), MAX_LAPS);
        assert_eq!(laps[0], Lap { number: 5, elapsed: secs(7) });
        assert_eq!(laps[4], Lap { number: 1, elapsed: secs(3) });
    }

    #[test]
    fn reset_clears_everything() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.toggle(t0);
        watch.lap(t0 + secs(1));
        watch.reset();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(t0 + secs(9)), Duration::ZERO);
        assert_eq!(watch.laps().count(), 0);
    }
}
