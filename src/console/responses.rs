//! Text and JSON renderings of snapshots and events

use serde::Serialize;
use tracing::warn;

use crate::state::{
    snapshot::{ClockView, StopwatchView, TimerView},
    ChessView, PanelView, SideView, StudioEvent, StudioSnapshot,
};

const PROGRESS_WIDTH: usize = 20;

/// How the renderer writes lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn snapshot(self, snapshot: &StudioSnapshot) -> Option<String> {
        match self {
            OutputFormat::Text => Some(render_snapshot(snapshot)),
            OutputFormat::Json => to_json_line(snapshot),
        }
    }

    pub fn event(self, event: &StudioEvent) -> Option<String> {
        match self {
            OutputFormat::Text => Some(render_event(event)),
            OutputFormat::Json => to_json_line(event),
        }
    }
}

fn to_json_line<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(line) => Some(line),
        Err(e) => {
            warn!("Failed to serialize output line: {}", e);
            None
        }
    }
}

/// One readout for the open panel
pub fn render_snapshot(snapshot: &StudioSnapshot) -> String {
    let body = match &snapshot.view {
        PanelView::Clock(view) => render_clock(view),
        PanelView::Stopwatch(view) => render_stopwatch(view),
        PanelView::Timer(view) => render_timer(view),
        PanelView::Chess(view) => render_chess(view),
    };
    format!("[{}] {}", snapshot.tab, body)
}

fn render_clock(view: &ClockView) -> String {
    format!(
        "{}  {}  (hands h={:.1} m={:.1} s={:.1})",
        view.digital, view.long_form, view.hands.hour, view.hands.minute, view.hands.second
    )
}

fn render_stopwatch(view: &StopwatchView) -> String {
    let mut out = format!(
        "{} {}",
        view.display,
        if view.running { "running" } else { "stopped" }
    );
    for lap in &view.laps {
        out.push_str(&format!("\n    Lap {}  {}", lap.number, lap.display));
    }
    out
}

fn render_timer(view: &TimerView) -> String {
    let filled = (view.progress * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "{} [{}{}] {:>3}% {}",
        view.display,
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        (view.progress * 100.0).round() as u32,
        if view.running { "running" } else { "stopped" }
    )
}

fn render_side(side: &SideView) -> String {
    let marker = if side.depleted {
        "x"
    } else if side.active {
        ">"
    } else {
        " "
    };
    format!("{}{} {}", marker, side.side.label(), side.display)
}

fn render_chess(view: &ChessView) -> String {
    let state = if view.done {
        "time up"
    } else if view.running {
        "running"
    } else if view.active.is_some() {
        "paused"
    } else {
        "ready"
    };
    format!(
        "{}  |  {}  ({}, {}m+{}s)",
        render_side(&view.white),
        render_side(&view.black),
        state,
        view.base_minutes,
        view.increment_seconds
    )
}

pub fn render_event(event: &StudioEvent) -> String {
    match event {
        StudioEvent::Applied { message, .. } => message.clone(),
        StudioEvent::Rejected { message } => format!("error: {}", message),
        StudioEvent::Depleted { side } => format!("{} is out of time", side.label()),
        StudioEvent::TimerFinished => "time's up".to_string(),
    }
}
