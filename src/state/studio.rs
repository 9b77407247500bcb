//! The studio shell: one open tool plus the theme

use chrono::NaiveDateTime;
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::{
    clock::{
        format::{format_centis, format_hms, format_mm_ss},
        Side, StartOutcome, SwitchOutcome, TickOutcome, TimeControl, TimerTick, WallClock,
    },
    console::{Command, CommandError, HELP},
};
use super::{
    snapshot::{ChessView, ClockView, PanelView, StopwatchView, TimerView},
    Panel, StudioSnapshot, Tab, ThemePreference,
};

/// Notable things the renderer should print
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StudioEvent {
    Applied { command: String, message: String },
    Rejected { message: String },
    Depleted { side: Side },
    TimerFinished,
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub message: String,
    /// The frame baseline must restart at this instant
    pub rebaseline: bool,
    /// The theme flipped and should be saved
    pub theme_changed: bool,
}

impl Applied {
    fn says(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rebaseline: false,
            theme_changed: false,
        }
    }

    fn rebaselined(mut self) -> Self {
        self.rebaseline = true;
        self
    }
}

/// Studio state owned by the frame driver
#[derive(Debug)]
pub struct Studio {
    panel: Panel,
    theme: ThemePreference,
    /// Settings for every new chess clock session
    time_control: TimeControl,
}

impl Studio {
    /// Create a studio showing `tab`; a disabled tab falls back to the clock
    pub fn new(tab: Tab, theme: ThemePreference, time_control: TimeControl, local_now: NaiveDateTime) -> Self {
        let panel = Panel::open(tab, time_control, local_now)
            .unwrap_or_else(|| Panel::Clock(WallClock::new(local_now)));

        Self {
            panel,
            theme,
            time_control,
        }
    }

    pub fn tab(&self) -> Tab {
        self.panel.tab()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Whether the frame loop has anything to advance
    pub fn needs_frames(&self) -> bool {
        self.panel.is_running()
    }

    pub fn shows_wall_clock(&self) -> bool {
        matches!(self.panel, Panel::Clock(_))
    }

    /// Apply a user command to the open tool
    pub fn apply(&mut self, command: Command, now: Instant, local_now: NaiveDateTime) -> Result<Applied, CommandError> {
        debug!("Applying command: {:?}", command);
        let applied = match command {
            Command::Help => Applied::says(HELP),
            Command::Status => Applied::says(self.status_line(now)),
            Command::OpenTab(tab) => self.open_tab(tab, local_now)?,
            Command::ToggleTheme => {
                let theme = self.theme.toggle();
                info!("Theme switched to {}", theme.label());
                Applied {
                    message: format!("{} theme", theme.label()),
                    rebaseline: false,
                    theme_changed: true,
                }
            }
            _ => self.apply_to_panel(command, now)?,
        };
        Ok(applied)
    }

    fn open_tab(&mut self, tab: Tab, local_now: NaiveDateTime) -> Result<Applied, CommandError> {
        if tab == self.tab() {
            return Ok(Applied::says(format!("{} already open", tab.title())));
        }
        let panel = Panel::open(tab, self.time_control, local_now)
            .ok_or(CommandError::TabDisabled(tab))?;

        info!("Opening {} tab", tab);
        self.panel = panel;
        Ok(Applied::says(tab.title()).rebaselined())
    }

    fn apply_to_panel(&mut self, command: Command, now: Instant) -> Result<Applied, CommandError> {
        let tab = self.tab();
        let not_applicable = CommandError::NotApplicable { command: command.name(), tab };

        match (&mut self.panel, command) {
            (Panel::Chess(clock), Command::Start) => Ok(chess_start(clock.start())),
            (Panel::Chess(clock), Command::Toggle) if !clock.is_running() => Ok(chess_start(clock.start())),
            (Panel::Chess(clock), Command::Pause | Command::Toggle) => {
                clock.pause();
                Ok(Applied::says("paused"))
            }
            (Panel::Chess(clock), Command::Reset) => {
                clock.reset();
                Ok(Applied::says("reset"))
            }
            (Panel::Chess(clock), Command::SwitchTurn(side)) => Ok(match clock.switch_turn(side) {
                SwitchOutcome::NotRunning => Applied::says("clock is not running"),
                SwitchOutcome::AlreadyActive => Applied::says(format!("{} already on move", side.label())),
                SwitchOutcome::Switched { credited, to, .. } if !credited.is_zero() => Applied::says(format!(
                    "{} to move (+{}s)",
                    to.label(),
                    credited.as_secs()
                ))
                .rebaselined(),
                SwitchOutcome::Switched { to, .. } => Applied::says(format!("{} to move", to.label())).rebaselined(),
            }),
            (Panel::Chess(clock), Command::BaseMinutes(minutes)) => {
                clock.configure(Duration::from_secs(minutes * 60), clock.increment());
                Ok(Applied::says(format!("base {}m", minutes)))
            }
            (Panel::Chess(clock), Command::IncrementSeconds(seconds)) => {
                clock.configure(clock.base_duration(), Duration::from_secs(seconds));
                Ok(Applied::says(format!("increment {}s", seconds)))
            }

            (Panel::Stopwatch(watch), Command::Start) => {
                watch.start(now);
                Ok(Applied::says("started"))
            }
            (Panel::Stopwatch(watch), Command::Pause) => {
                watch.pause(now);
                Ok(Applied::says("paused"))
            }
            (Panel::Stopwatch(watch), Command::Toggle) => {
                let running = watch.toggle(now);
                Ok(Applied::says(if running { "started" } else { "paused" }))
            }
            (Panel::Stopwatch(watch), Command::Reset) => {
                watch.reset();
                Ok(Applied::says("reset"))
            }
            (Panel::Stopwatch(watch), Command::Lap) => Ok(match watch.lap(now) {
                Some(elapsed) => Applied::says(format!("lap {}", format_centis(elapsed))),
                None => Applied::says("stopwatch is not running"),
            }),

            (Panel::Timer(timer), Command::Start) => Ok(if timer.start() {
                Applied::says("started").rebaselined()
            } else {
                Applied::says("nothing left to count")
            }),
            (Panel::Timer(timer), Command::Pause) => {
                timer.pause();
                Ok(Applied::says("paused"))
            }
            (Panel::Timer(timer), Command::Toggle) => Ok(if timer.toggle() {
                Applied::says("started").rebaselined()
            } else {
                Applied::says("paused")
            }),
            (Panel::Timer(timer), Command::Reset) => {
                timer.reset();
                Ok(Applied::says("reset"))
            }
            (Panel::Timer(timer), Command::SetTimer { minutes, seconds }) => {
                match seconds {
                    Some(seconds) => timer.set_minutes_seconds(minutes, seconds),
                    None => timer.set_minutes(minutes),
                }
                Ok(Applied::says(format!("duration {}", format_hms(timer.duration()))))
            }
            (Panel::Timer(timer), Command::Preset(preset)) => {
                timer.apply_preset(preset);
                Ok(Applied::says(format!("duration {}", preset.label())))
            }

            _ => Err(not_applicable),
        }
    }

    /// Advance the open tool by one frame
    pub fn advance(&mut self, delta: Duration) -> Option<StudioEvent> {
        match &mut self.panel {
            Panel::Chess(clock) => match clock.tick(delta) {
                TickOutcome::Depleted(side) => Some(StudioEvent::Depleted { side }),
                _ => None,
            },
            Panel::Timer(timer) => match timer.tick(delta) {
                TimerTick::Finished => Some(StudioEvent::TimerFinished),
                _ => None,
            },
            Panel::Stopwatch(_) | Panel::Clock(_) => None,
        }
    }

    /// Move the wall clock to `local_now`; true when the shown second changed
    pub fn refresh_wall_clock(&mut self, local_now: NaiveDateTime) -> bool {
        match &mut self.panel {
            Panel::Clock(clock) => {
                let before = clock.second_of_day();
                clock.refresh(local_now);
                clock.second_of_day() != before
            }
            _ => false,
        }
    }

    pub fn snapshot(&self, now: Instant) -> StudioSnapshot {
        let view = match &self.panel {
            Panel::Clock(clock) => PanelView::Clock(ClockView::of(clock)),
            Panel::Stopwatch(watch) => PanelView::Stopwatch(StopwatchView::of(watch, now)),
            Panel::Timer(timer) => PanelView::Timer(TimerView::of(timer)),
            Panel::Chess(clock) => PanelView::Chess(ChessView::of(clock)),
        };

        StudioSnapshot {
            tab: self.tab(),
            theme: self.theme,
            view,
        }
    }

    /// Calculate uptime as a formatted string
    /// One line describing the open tool
    fn status_line(&self, now: Instant) -> String {
        let detail = match &self.panel {
            Panel::Clock(clock) => clock.long_form(),
            Panel::Stopwatch(watch) => format!(
                "{} {}, {} laps",
                format_centis(watch.elapsed(now)),
                if watch.is_running() { "running" } else { "stopped" },
                watch.laps().count()
            ),
            Panel::Timer(timer) => format!(
                "{} of {} left, {}",
                format_hms(timer.remaining()),
                format_hms(timer.duration()),
                if timer.is_running() { "running" } else { "stopped" }
            ),
            Panel::Chess(clock) => {
                let state = match (clock.is_done(), clock.is_running(), clock.active_side()) {
                    (true, _, _) => "done".to_string(),
                    (false, true, Some(side)) => format!("{} to move", side.label()),
                    (false, _, Some(_)) => "paused".to_string(),
                    (false, _, None) => "ready".to_string(),
                };
                format!(
                    "{}m+{}s, White {} Black {}, {}",
                    clock.base_duration().as_secs() / 60,
                    clock.increment().as_secs(),
                    format_mm_ss(clock.remaining(Side::White)),
                    format_mm_ss(clock.remaining(Side::Black)),
                    state
                )
            }
        };
        format!("tab={} theme={} {}", self.tab(), self.theme.label(), detail)
    }
}

fn chess_start(outcome: StartOutcome) -> Applied {
    match outcome {
        StartOutcome::Started(side) => Applied::says(format!("started, {} to move", side.label())).rebaselined(),
        StartOutcome::Resumed(side) => Applied::says(format!("resumed, {} to move", side.label())).rebaselined(),
        StartOutcome::Done => Applied::says("time is up; reset to play again"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn studio(tab: Tab) -> Studio {
        Studio::new(tab, ThemePreference::default(), TimeControl::default(), Local::now().naive_local())
    }

    fn chess_view(studio: &Studio) -> ChessView {
        match studio.snapshot(Instant::now()).view {
            PanelView::Chess(view) => view,
            other => panic!("expected chess view, got {:?}", other),
        }
    }

    #[test]
    fn disabled_tab_falls_back_to_clock() {
        assert_eq!(studio(Tab::More).tab(), Tab::Clock);
    }

    #[test]
    fn opening_a_tab_discards_previous_state() {
        let mut studio = studio(Tab::Chess);
        let now = Instant::now();
        let local = Local::now().naive_local();
        studio.apply(Command::Start, now, local).unwrap();
        studio.advance(Duration::from_secs(10));

        studio.apply(Command::OpenTab(Tab::Timer), now, local).unwrap();
        studio.apply(Command::OpenTab(Tab::Chess), now, local).unwrap();

        let view = chess_view(&studio);
        assert_eq!(view.white.remaining_ms, 300_000);
        assert_eq!(view.active, None);
    }

    #[test]
    fn more_tab_is_rejected() {
        let mut studio = studio(Tab::Clock);
        let result = studio.apply(Command::OpenTab(Tab::More), Instant::now(), Local::now().naive_local());
        assert_eq!(result, Err(CommandError::TabDisabled(Tab::More)));
        assert_eq!(studio.tab(), Tab::Clock);
    }

    #[test]
    fn commands_outside_their_tab_are_rejected() {
        let mut studio = studio(Tab::Stopwatch);
        let result = studio.apply(Command::SwitchTurn(Side::Black), Instant::now(), Local::now().naive_local());
        assert_eq!(
            result,
            Err(CommandError::NotApplicable { command: "black", tab: Tab::Stopwatch })
        );
    }

    #[test]
    fn switching_turns_requests_rebaseline() {
        let mut studio = studio(Tab::Chess);
        let now = Instant::now();
        let local = Local::now().naive_local();

        assert!(studio.apply(Command::Start, now, local).unwrap().rebaseline);
        assert!(studio.apply(Command::SwitchTurn(Side::Black), now, local).unwrap().rebaseline);
        assert!(!studio.apply(Command::SwitchTurn(Side::Black), now, local).unwrap().rebaseline);
        assert!(!studio.apply(Command::Pause, now, local).unwrap().rebaseline);
    }

    #[test]
    fn depletion_is_reported_once() {
        let mut studio = studio(Tab::Chess);
        let local = Local::now().naive_local();
        studio.apply(Command::BaseMinutes(1), Instant::now(), local).unwrap();
        studio.apply(Command::Start, Instant::now(), local).unwrap();

        assert_eq!(studio.advance(Duration::from_secs(59)), None);
        assert_eq!(
            studio.advance(Duration::from_secs(2)),
            Some(StudioEvent::Depleted { side: Side::White })
        );
        assert!(!studio.needs_frames());
        assert_eq!(studio.advance(Duration::from_secs(2)), None);
        assert!(chess_view(&studio).white.depleted);
    }

    #[test]
    fn timer_finish_is_reported() {
        let mut studio = studio(Tab::Timer);
        let local = Local::now().naive_local();
        studio
            .apply(Command::SetTimer { minutes: 0, seconds: Some(2) }, Instant::now(), local)
            .unwrap();
        studio.apply(Command::Toggle, Instant::now(), local).unwrap();
        assert!(studio.needs_frames());
        assert_eq!(studio.advance(Duration::from_secs(3)), Some(StudioEvent::TimerFinished));
        assert!(!studio.needs_frames());
    }

    #[test]
    fn theme_toggle_is_flagged_for_saving() {
        let mut studio = studio(Tab::Clock);
        let applied = studio
            .apply(Command::ToggleTheme, Instant::now(), Local::now().naive_local())
            .unwrap();
        assert!(applied.theme_changed);
        assert!(studio.theme().dark);
    }

    #[test]
    fn increment_change_starts_a_new_session() {
        let mut studio = studio(Tab::Chess);
        let local = Local::now().naive_local();
        studio.apply(Command::BaseMinutes(1), Instant::now(), local).unwrap();
        studio.apply(Command::Start, Instant::now(), local).unwrap();
        studio.advance(Duration::from_millis(500));

        studio.apply(Command::IncrementSeconds(10), Instant::now(), local).unwrap();

        let view = chess_view(&studio);
        assert_eq!(view.white.remaining_ms, 60_000);
        assert_eq!(view.black.remaining_ms, 60_000);
        assert_eq!(view.active, None);
        assert!(!view.running);
        assert_eq!(view.increment_seconds, 10);

        let applied = studio.apply(Command::SwitchTurn(Side::Black), Instant::now(), local).unwrap();
        assert_eq!(applied.message, "clock is not running");
        assert_eq!(chess_view(&studio).white.remaining_ms, 60_000);
    }

    #[test]
    fn status_describes_the_open_tool() {
        let mut studio = studio(Tab::Chess);
        let local = Local::now().naive_local();
        studio.apply(Command::Start, Instant::now(), local).unwrap();
        studio.advance(Duration::from_secs(30));

        let applied = studio.apply(Command::Status, Instant::now(), local).unwrap();
        assert_eq!(
            applied.message,
            "tab=chess theme=light 5m+0s, White 04:30 Black 05:00, White to move"
        );
    }

    #[test]
    fn quit_is_not_a_studio_command() {
        let mut studio = studio(Tab::Clock);
        let result = studio.apply(Command::Quit, Instant::now(), Local::now().naive_local());
        assert_eq!(result, Err(CommandError::NotApplicable { command: "quit", tab: Tab::Clock }));
    }
}
