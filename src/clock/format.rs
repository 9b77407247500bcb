//! Readout formatting shared by the panels

use std::time::Duration;

fn split_hms(total_seconds: u64) -> (u64, u64, u64) {
    (total_seconds / 3600, (total_seconds % 3600) / 60, total_seconds % 60)
}

/// `MM:SS`, minutes unbounded (a 60 minute clock reads `60:00`)
pub fn format_mm_ss(time: Duration) -> String {
    let total = time.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `[HH:]MM:SS`, hours shown only when non-zero
pub fn format_hms(time: Duration) -> String {
    let (hours, minutes, seconds) = split_hms(time.as_secs());
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// `[HH:]MM:SS.cc` with centiseconds
pub fn format_centis(time: Duration) -> String {
    let centis = time.subsec_millis() / 10;
    format!("{}.{:02}", format_hms(time), centis)
}
