//! Read-only views of the studio handed to the renderer

use std::time::Duration;
use serde::Serialize;
use tokio::time::Instant;

use crate::clock::{
    format::{format_centis, format_hms, format_mm_ss},
    wall_clock::hour_marks,
    CountdownTimer, HandAngles, Side, Stopwatch, TurnClock, WallClock,
};
use super::{Tab, ThemePreference};

fn millis(time: Duration) -> u64 {
    u64::try_from(time.as_millis()).unwrap_or(u64::MAX)
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioSnapshot {
    pub tab: Tab,
    pub theme: ThemePreference,
    pub view: PanelView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum PanelView {
    Clock(ClockView),
    Stopwatch(StopwatchView),
    Timer(TimerView),
    Chess(ChessView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockView {
    pub digital: String,
    pub long_form: String,
    pub hands: HandAngles,
    pub hour_marks: [f64; 12],
}

impl ClockView {
    pub fn of(clock: &WallClock) -> Self {
        Self {
            digital: clock.digital(),
            long_form: clock.long_form(),
            hands: clock.hands(),
            hour_marks: hour_marks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapView {
    pub number: usize,
    pub elapsed_ms: u64,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopwatchView {
    pub elapsed_ms: u64,
    pub display: String,
    pub running: bool,
    pub laps: Vec<LapView>,
}

impl StopwatchView {
    pub fn of(watch: &Stopwatch, now: Instant) -> Self {
        let elapsed = watch.elapsed(now);
        Self {
            elapsed_ms: millis(elapsed),
            display: format_centis(elapsed),
            running: watch.is_running(),
            laps: watch
                .laps()
                .map(|lap| LapView {
                    number: lap.number,
                    elapsed_ms: millis(lap.elapsed),
                    display: format_centis(lap.elapsed),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    pub duration_ms: u64,
    pub remaining_ms: u64,
    pub display: String,
    pub progress: f64,
    pub running: bool,
}

impl TimerView {
    pub fn of(timer: &CountdownTimer) -> Self {
        Self {
            duration_ms: millis(timer.duration()),
            remaining_ms: millis(timer.remaining()),
            display: format_hms(timer.remaining()),
            progress: timer.progress(),
            running: timer.is_running(),
        }
    }
}

/// One side of the chess clock as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideView {
    pub side: Side,
    pub remaining_ms: u64,
    pub display: String,
    pub active: bool,
    pub depleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChessView {
    pub white: SideView,
    pub black: SideView,
    pub active: Option<Side>,
    pub running: bool,
    pub done: bool,
    pub base_minutes: u64,
    pub increment_seconds: u64,
}

impl ChessView {
    pub fn of(clock: &TurnClock) -> Self {
        let side_view = |side: Side| SideView {
            side,
            remaining_ms: millis(clock.remaining(side)),
            display: format_mm_ss(clock.remaining(side)),
            active: clock.active_side() == Some(side),
            depleted: clock.is_depleted(side),
        };

        Self {
            white: side_view(Side::White),
            black: side_view(Side::Black),
            active: clock.active_side(),
            running: clock.is_running(),
            done: clock.is_done(),
            base_minutes: clock.base_duration().as_secs() / 60,
            increment_seconds: clock.increment().as_secs(),
        }
    }

    pub fn side(&self, side: Side) -> &SideView {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeControl;

    #[test]
    fn chess_view_marks_active_and_depleted() {
        let mut clock = TurnClock::new(TimeControl::from_minutes(1, 0));
        clock.start();
        clock.switch_turn(Side::Black);
        clock.tick(Duration::from_secs(61));

        let view = ChessView::of(&clock);
        assert!(view.done);
        assert!(!view.running);
        assert!(view.black.depleted);
        assert!(view.black.active);
        assert_eq!(view.black.display, "00:00");
        assert_eq!(view.side(Side::White).display, "01:00");
        assert!(!view.white.depleted);
    }

    #[test]
    fn panel_view_is_tagged_in_json() {
        let view = PanelView::Timer(TimerView::of(&CountdownTimer::default()));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["panel"], "timer");
        assert_eq!(json["display"], "05:00");
        assert_eq!(json["remaining_ms"], 300_000);
    }
}
