//! Tabs of the studio and the tool state behind each

use std::{fmt, str::FromStr};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    clock::{CountdownTimer, Stopwatch, TimeControl, TurnClock, WallClock},
    console::CommandError,
};

/// Navigation tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Clock,
    Stopwatch,
    Timer,
    Chess,
    /// Placeholder tab, shown but not selectable
    More,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Clock, Tab::Stopwatch, Tab::Timer, Tab::Chess, Tab::More];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Clock => "clock",
            Tab::Stopwatch => "stopwatch",
            Tab::Timer => "timer",
            Tab::Chess => "chess",
            Tab::More => "more",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Clock => "Clock",
            Tab::Stopwatch => "Stopwatch",
            Tab::Timer => "Timer",
            Tab::Chess => "Chess clock",
            Tab::More => "More soon",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Tab::More
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == name)
            .ok_or(CommandError::UnknownTab(name))
    }
}

/// The tool currently on screen; replaced wholesale when the tab changes
#[derive(Debug, Clone)]
pub enum Panel {
    Clock(WallClock),
    Stopwatch(Stopwatch),
    Timer(CountdownTimer),
    Chess(TurnClock),
}

impl Panel {
    /// Fresh state for `tab`; `None` for tabs that cannot be opened
    pub fn open(tab: Tab, control: TimeControl, local_now: NaiveDateTime) -> Option<Self> {
        match tab {
            Tab::Clock => Some(Panel::Clock(WallClock::new(local_now))),
            Tab::Stopwatch => Some(Panel::Stopwatch(Stopwatch::new())),
            Tab::Timer => Some(Panel::Timer(CountdownTimer::default())),
            Tab::Chess => Some(Panel::Chess(TurnClock::new(control))),
            Tab::More => None,
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Panel::Clock(_) => Tab::Clock,
            Panel::Stopwatch(_) => Tab::Stopwatch,
            Panel::Timer(_) => Tab::Timer,
            Panel::Chess(_) => Tab::Chess,
        }
    }

    /// Whether the panel wants per-frame updates
    pub fn is_running(&self) -> bool {
        match self {
            Panel::Clock(_) => false,
            Panel::Stopwatch(watch) => watch.is_running(),
            Panel::Timer(timer) => timer.is_running(),
            Panel::Chess(clock) => clock.is_running(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_names_parse() {
        assert_eq!("Stopwatch".parse::<Tab>(), Ok(Tab::Stopwatch));
        assert_eq!("more".parse::<Tab>(), Ok(Tab::More));
        assert!(!Tab::More.is_enabled());
    }

    #[test]
    fn more_tab_has_no_panel() {
        let now = chrono::Local::now().naive_local();
        assert!(Panel::open(Tab::More, TimeControl::default(), now).is_none());
        let chess = Panel::open(Tab::Chess, TimeControl::default(), now);
        assert_eq!(chess.map(|p| p.tab()), Some(Tab::Chess));
    }
}
