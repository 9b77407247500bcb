//! Plain countdown timer

use std::time::Duration;
use tracing::{debug, info};

/// Longest duration the timer accepts
pub const MAX_DURATION: Duration = Duration::from_secs(12 * 60 * 60);

/// One-tap durations offered next to the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPreset {
    OneMinute,
    FiveMinutes,
    TenMinutes,
    TwentyFiveMinutes,
}

impl TimerPreset {
    pub const ALL: [TimerPreset; 4] = [
        TimerPreset::OneMinute,
        TimerPreset::FiveMinutes,
        TimerPreset::TenMinutes,
        TimerPreset::TwentyFiveMinutes,
    ];

    pub fn duration(self) -> Duration {
        Duration::from_secs(match self {
            TimerPreset::OneMinute => 60,
            TimerPreset::FiveMinutes => 300,
            TimerPreset::TenMinutes => 600,
            TimerPreset::TwentyFiveMinutes => 1500,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerPreset::OneMinute => "1m",
            TimerPreset::FiveMinutes => "5m",
            TimerPreset::TenMinutes => "10m",
            TimerPreset::TwentyFiveMinutes => "25m",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }
}

/// Result of a countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Idle,
    Counting(Duration),
    /// Reached zero on this tick; the timer stopped itself
    Finished,
}

/// Countdown from a configurable duration to zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    duration: Duration,
    remaining: Duration,
    running: bool,
}

impl CountdownTimer {
    pub fn new(duration: Duration) -> Self {
        let duration = duration.min(MAX_DURATION);
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Set the duration; a stopped timer reloads its remaining time
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration.min(MAX_DURATION);
        if !self.running {
            self.remaining = self.duration;
        }
        debug!("Timer duration set to {}s", self.duration.as_secs());
    }

    pub fn set_minutes(&mut self, minutes: u64) {
        self.set_duration(Duration::from_secs(minutes.saturating_mul(60)));
    }

    /// Whole minutes plus seconds, seconds clamped to 0..=59
    pub fn set_minutes_seconds(&mut self, minutes: u64, seconds: u64) {
        let total = minutes.saturating_mul(60).saturating_add(seconds.min(59));
        self.set_duration(Duration::from_secs(total));
    }

    pub fn apply_preset(&mut self, preset: TimerPreset) {
        self.set_duration(preset.duration());
    }

    /// Start counting; returns false when there is nothing left to count
    pub fn start(&mut self) -> bool {
        if self.remaining.is_zero() {
            return false;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start or pause; returns the new running flag
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.duration;
    }

    pub fn tick(&mut self, delta: Duration) -> TimerTick {
        if !self.running {
            return TimerTick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            info!("Countdown finished");
            self.running = false;
            TimerTick::Finished
        } else {
            TimerTick::Counting(self.remaining)
        }
    }

    /// Fraction elapsed in [0, 1]; an empty duration counts as complete
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let fraction = 1.0 - self.remaining.as_secs_f64() / self.duration.as_secs_f64();
        fraction.clamp(0.0, 1.0)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(TimerPreset::FiveMinutes.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_minutes() {
        let timer = CountdownTimer::default();
        assert_eq!(timer.duration(), Duration::from_secs(300));
        assert_eq!(timer.remaining(), Duration::from_secs(300));
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn counts_down_and_finishes() {
        let mut timer = CountdownTimer::new(Duration::from_secs(1));
        assert!(timer.start());
        assert_eq!(timer.tick(Duration::from_millis(400)), TimerTick::Counting(Duration::from_millis(600)));
        assert_eq!(timer.tick(Duration::from_millis(900)), TimerTick::Finished);
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert!(!timer.is_running());
        assert_eq!(timer.progress(), 1.0);
        assert_eq!(timer.tick(Duration::from_millis(900)), TimerTick::Idle);
    }

    #[test]
    fn finished_timer_does_not_start() {
        let mut timer = CountdownTimer::new(Duration::ZERO);
        assert!(!timer.start());
        assert!(!timer.toggle());
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn duration_changes_reload_only_when_stopped() {
        let mut timer = CountdownTimer::default();
        timer.start();
        timer.tick(Duration::from_secs(10));
        timer.apply_preset(TimerPreset::OneMinute);
        assert_eq!(timer.duration(), Duration::from_secs(60));
        assert_eq!(timer.remaining(), Duration::from_secs(290));

        timer.pause();
        timer.set_minutes(2);
        assert_eq!(timer.remaining(), Duration::from_secs(120));
    }

    #[test]
    fn clamps_inputs() {
        let mut timer = CountdownTimer::default();
        timer.set_minutes_seconds(3, 75);
        assert_eq!(timer.duration(), Duration::from_secs(239));
        timer.set_minutes(24 * 60);
        assert_eq!(timer.duration(), MAX_DURATION);
    }

    #[test]
    fn reset_reloads_duration() {
        let mut timer = CountdownTimer::default();
        timer.toggle();
        timer.tick(Duration::from_secs(150));
        assert_eq!(timer.progress(), 0.5);
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), Duration::from_secs(300));
    }

    #[test]
    fn presets_round_trip_labels() {
        assert_eq!(TimerPreset::from_label("25m"), Some(TimerPreset::TwentyFiveMinutes));
        assert_eq!(TimerPreset::from_label("2m"), None);
    }
}
