//! Console command parsing

use std::str::FromStr;
use thiserror::Error;

use crate::{
    clock::{Side, TimerPreset},
    state::Tab,
};

/// Base durations offered by the chess clock selector, in minutes
pub const BASE_MINUTES_OPTIONS: [u64; 7] = [1, 3, 5, 10, 15, 30, 60];

/// Increments offered by the chess clock selector, in seconds
pub const INCREMENT_SECONDS_OPTIONS: [u64; 6] = [0, 1, 2, 3, 5, 10];

/// A user action read from the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Quit,
    OpenTab(Tab),
    ToggleTheme,
    Start,
    Pause,
    Toggle,
    Reset,
    SwitchTurn(Side),
    BaseMinutes(u64),
    IncrementSeconds(u64),
    Lap,
    SetTimer { minutes: u64, seconds: Option<u64> },
    Preset(TimerPreset),
}

impl Command {
    /// Name as typed, for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Status => "status",
            Command::Quit => "quit",
            Command::OpenTab(_) => "tab",
            Command::ToggleTheme => "theme",
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Toggle => "toggle",
            Command::Reset => "reset",
            Command::SwitchTurn(Side::White) => "white",
            Command::SwitchTurn(Side::Black) => "black",
            Command::BaseMinutes(_) => "base",
            Command::IncrementSeconds(_) => "inc",
            Command::Lap => "lap",
            Command::SetTimer { .. } => "set",
            Command::Preset(_) => "preset",
        }
    }
}

/// Errors raised while reading or applying a console command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{value}' is not a whole number")]
    InvalidNumber { value: String },

    #[error("{value} is not one of {options}")]
    NotAnOption { value: String, options: String },

    #[error("no such tab '{0}'")]
    UnknownTab(String),

    #[error("the {0} tab is not available yet")]
    TabDisabled(Tab),

    #[error("'{command}' does not apply to the {tab} tab")]
    NotApplicable { command: &'static str, tab: Tab },
}

fn parse_number(value: &str) -> Result<u64, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

fn pick_option(value: u64, options: &[u64], unit: &str) -> Result<u64, CommandError> {
    if options.contains(&value) {
        Ok(value)
    } else {
        let listed: Vec<String> = options.iter().map(|o| format!("{}{}", o, unit)).collect();
        Err(CommandError::NotAnOption {
            value: format!("{}{}", value, unit),
            options: listed.join(", "),
        })
    }
}

/// Validate a base duration against the selector's options
pub fn base_minutes_option(value: &str) -> Result<u64, CommandError> {
    let value = value.trim().trim_end_matches('m');
    pick_option(parse_number(value)?, &BASE_MINUTES_OPTIONS, "m")
}

/// Validate an increment against the selector's options
pub fn increment_seconds_option(value: &str) -> Result<u64, CommandError> {
    let value = value.trim().trim_end_matches('s');
    pick_option(parse_number(value)?, &INCREMENT_SECONDS_OPTIONS, "s")
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_ascii_lowercase();
        let mut words = lowered.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let first = words.next();
        let second = words.next();

        let command = match verb {
            "help" | "?" => Command::Help,
            "status" => Command::Status,
            "quit" | "exit" => Command::Quit,
            "theme" => Command::ToggleTheme,
            "start" => Command::Start,
            "pause" => Command::Pause,
            "toggle" => Command::Toggle,
            "reset" => Command::Reset,
            "lap" => Command::Lap,
            "white" => Command::SwitchTurn(Side::White),
            "black" => Command::SwitchTurn(Side::Black),
            "tab" => {
                let name = first.ok_or(CommandError::MissingArgument {
                    command: "tab",
                    argument: "a tab name",
                })?;
                Command::OpenTab(name.parse()?)
            }
            "base" => {
                let minutes = first.ok_or(CommandError::MissingArgument {
                    command: "base",
                    argument: "minutes",
                })?;
                Command::BaseMinutes(base_minutes_option(minutes)?)
            }
            "inc" | "increment" => {
                let seconds = first.ok_or(CommandError::MissingArgument {
                    command: "inc",
                    argument: "seconds",
                })?;
                Command::IncrementSeconds(increment_seconds_option(seconds)?)
            }
            "set" => {
                let minutes = first.ok_or(CommandError::MissingArgument {
                    command: "set",
                    argument: "minutes",
                })?;
                Command::SetTimer {
                    minutes: parse_number(minutes)?,
                    seconds: second.map(parse_number).transpose()?,
                }
            }
            "preset" => {
                let label = first.ok_or(CommandError::MissingArgument {
                    command: "preset",
                    argument: "one of 1m, 5m, 10m, 25m",
                })?;
                let preset = TimerPreset::from_label(label).ok_or_else(|| CommandError::NotAnOption {
                    value: label.to_string(),
                    options: "1m, 5m, 10m, 25m".to_string(),
                })?;
                Command::Preset(preset)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  tab <clock|stopwatch|timer|chess>  open a tool (its previous state is discarded)
  start | pause | toggle | reset     control the open tool
  white | black                      chess: hand the turn to that side
  base <1|3|5|10|15|30|60>           chess: base minutes (resets the clock)
  inc <0|1|2|3|5|10>                 chess: increment seconds (resets the clock)
  lap                                stopwatch: record a lap
  set <minutes> [seconds]            timer: set the duration
  preset <1m|5m|10m|25m>             timer: preset duration
  theme                              toggle dark mode
  status | help | quit";
