//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::Parser;

use crate::{
    clock::{Side, TimeControl},
    console::commands::{base_minutes_option, increment_seconds_option},
    state::Tab,
};

fn parse_base_minutes(value: &str) -> Result<u64, String> {
    base_minutes_option(value).map_err(|e| e.to_string())
}

fn parse_increment_seconds(value: &str) -> Result<u64, String> {
    increment_seconds_option(value).map_err(|e| e.to_string())
}

fn parse_side(value: &str) -> Result<Side, String> {
    value.parse()
}

fn parse_tab(value: &str) -> Result<Tab, String> {
    let tab: Tab = value.parse().map_err(|e: crate::console::CommandError| e.to_string())?;
    if tab.is_enabled() {
        Ok(tab)
    } else {
        Err(format!("the {} tab is not available yet", tab))
    }
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "clock-studio")]
#[command(about = "A terminal suite of time tools: clock, stopwatch, timer and chess clock")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Chess clock base time in minutes (1, 3, 5, 10, 15, 30 or 60)
    #[arg(short, long, default_value = "5", value_parser = parse_base_minutes)]
    pub base: u64,

    /// Chess clock increment in seconds (0, 1, 2, 3, 5 or 10)
    #[arg(short, long, default_value = "0", value_parser = parse_increment_seconds)]
    pub increment: u64,

    /// Side that starts the chess clock
    #[arg(long, default_value = "white", value_parser = parse_side)]
    pub first_to_move: Side,

    /// Tab shown at startup
    #[arg(short, long, default_value = "clock", value_parser = parse_tab)]
    pub tab: Tab,

    /// Display refresh rate in frames per second
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=240))]
    pub frame_rate: u32,

    /// Where the theme preference is stored
    #[arg(long)]
    pub theme_file: Option<PathBuf>,

    /// Print the readout every time it changes
    #[arg(short, long)]
    pub watch: bool,

    /// Print events and readouts as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Settings for each new chess clock session
    pub fn time_control(&self) -> TimeControl {
        TimeControl::from_minutes(self.base, self.increment).with_first_to_move(self.first_to_move)
    }

    /// Time between display refreshes
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Theme file path, defaulting to the user's config directory
    pub fn theme_path(&self) -> PathBuf {
        self.theme_file.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("clock-studio")
                .join("theme.json")
        })
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_selectors() {
        let config = Config::try_parse_from(["clock-studio"]).unwrap();
        assert_eq!(config.time_control(), TimeControl::from_minutes(5, 0));
        assert_eq!(config.tab, Tab::Clock);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn accepts_enumerated_values() {
        let config = Config::try_parse_from([
            "clock-studio", "--base", "3", "-i", "2", "--first-to-move", "black", "--tab", "chess",
        ])
        .unwrap();
        assert_eq!(
            config.time_control(),
            TimeControl::from_minutes(3, 2).with_first_to_move(Side::Black)
        );
        assert_eq!(config.tab, Tab::Chess);
    }

    #[test]
    fn rejects_values_outside_the_sets() {
        assert!(Config::try_parse_from(["clock-studio", "--base", "7"]).is_err());
        assert!(Config::try_parse_from(["clock-studio", "--increment", "4"]).is_err());
        assert!(Config::try_parse_from(["clock-studio", "--tab", "more"]).is_err());
        assert!(Config::try_parse_from(["clock-studio", "--frame-rate", "0"]).is_err());
    }

    #[test]
    fn frame_period_follows_rate() {
        let config = Config::try_parse_from(["clock-studio", "--frame-rate", "50"]).unwrap();
        assert_eq!(config.frame_period(), Duration::from_millis(20));
    }

    #[test]
    fn explicit_theme_file_wins() {
        let config = Config::try_parse_from(["clock-studio", "--theme-file", "/tmp/t.json"]).unwrap();
        assert_eq!(config.theme_path(), PathBuf::from("/tmp/t.json"));
    }
}
