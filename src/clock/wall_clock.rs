//! Local time readout with analog hand angles

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Hand rotations in degrees, clockwise from twelve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(hours: u32, minutes: u32, seconds: u32) -> Self {
        let (h, m, s) = (f64::from(hours), f64::from(minutes), f64::from(seconds));
        Self {
            hour: ((h % 12.0) + m / 60.0) * 30.0,
            minute: m * 6.0 + s * 0.1,
            second: s * 6.0,
        }
    }
}

/// Rotation of each of the twelve hour marks
pub fn hour_marks() -> [f64; 12] {
    std::array::from_fn(|i| i as f64 * 30.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallClock {
    now: NaiveDateTime,
}

impl WallClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn refresh(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// `HH:MM:SS` on a 24 hour clock
    pub fn digital(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.now.hour(),
            self.now.minute(),
            self.now.second()
        )
    }

    pub fn hands(&self) -> HandAngles {
        HandAngles::at(self.now.hour(), self.now.minute(), self.now.second())
    }

    /// Long local date and time, e.g. `10/19/2026, 3:04:05 PM`
    pub fn long_form(&self) -> String {
        self.now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    /// Changes only when the displayed second changes
    pub fn second_of_day(&self) -> u32 {
        self.now.num_seconds_from_midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> WallClock {
        let time = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid date");
        WallClock::new(time)
    }

    #[test]
    fn digital_is_zero_padded() {
        assert_eq!(at(9, 5, 7).digital(), "09:05:07");
    }

    #[test]
    fn hands_follow_time() {
        let hands = at(15, 30, 20).hands();
        assert_eq!(hands.hour, 105.0);
        assert!((hands.minute - 182.0).abs() < 1e-9);
        assert_eq!(hands.second, 120.0);
    }

    #[test]
    fn long_form_uses_twelve_hour_clock() {
        assert_eq!(at(15, 4, 5).long_form(), "10/19/2026, 3:04:05 PM");
    }

    #[test]
    fn twelve_marks_thirty_degrees_apart() {
        let marks = hour_marks();
        assert_eq!(marks[0], 0.0);
        assert_eq!(marks[11], 330.0);
    }
}
