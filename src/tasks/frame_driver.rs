//! Frame driver background task
//!
//! Owns the [`Studio`] and serializes every mutation: console commands,
//! per-frame ticks while the open tool runs, and the once-a-second wall
//! clock refresh all happen inside one `select!` loop.

use std::time::Duration;
use chrono::Local;
use tokio::{
    sync::{broadcast, mpsc, watch},
    time::{interval, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    clock::FrameClock,
    console::{Command, CommandError},
    services::ThemeStore,
    state::{Studio, StudioEvent, StudioSnapshot},
};

/// Channels the driver publishes on
#[derive(Debug)]
pub struct Outputs {
    /// Latest view, overwritten every frame
    pub snapshot_tx: watch::Sender<StudioSnapshot>,
    /// Notable events, each delivered once
    pub event_tx: broadcast::Sender<StudioEvent>,
}

impl Outputs {
    pub fn new(
        initial: StudioSnapshot,
    ) -> (Self, watch::Receiver<StudioSnapshot>, broadcast::Receiver<StudioEvent>) {
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (event_tx, event_rx) = broadcast::channel(100);
        (Self { snapshot_tx, event_tx }, snapshot_rx, event_rx)
    }

    fn publish(&self, studio: &Studio, now: Instant) {
        if self.snapshot_tx.send(studio.snapshot(now)).is_err() {
            debug!("No snapshot receivers left");
        }
    }

    fn emit(&self, event: StudioEvent) {
        if let Err(e) = self.event_tx.send(event) {
            warn!("Failed to send studio event: {}", e);
        }
    }
}

/// Run the studio until input ends or `quit` arrives
pub async fn frame_driver_task(
    mut studio: Studio,
    mut lines: mpsc::Receiver<String>,
    outputs: Outputs,
    store: ThemeStore,
    frame_period: Duration,
) {
    info!("Starting frame driver ({}us frames)", frame_period.as_micros());

    let mut frames = interval(frame_period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut seconds = interval(Duration::from_secs(1));
    seconds.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frame_clock = FrameClock::new();

    outputs.publish(&studio, Instant::now());

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("Input closed, stopping frame driver");
                    break;
                };

                let command = match line.parse::<Command>() {
                    Ok(Command::Quit) => {
                        info!("Quit requested");
                        break;
                    }
                    Ok(command) => command,
                    Err(CommandError::Empty) => continue,
                    Err(e) => {
                        debug!("Rejected input {:?}: {}", line, e);
                        outputs.emit(StudioEvent::Rejected { message: e.to_string() });
                        continue;
                    }
                };

                let now = Instant::now();
                match studio.apply(command, now, Local::now().naive_local()) {
                    Ok(applied) => {
                        if applied.rebaseline {
                            frame_clock.rebaseline();
                        }
                        if applied.theme_changed {
                            if let Err(e) = store.save(studio.theme()).await {
                                warn!("Theme not saved: {}", e);
                            }
                        }
                        outputs.publish(&studio, now);
                        outputs.emit(StudioEvent::Applied {
                            command: command.name().to_string(),
                            message: applied.message,
                        });
                    }
                    Err(e) => {
                        debug!("Command {} rejected: {}", command.name(), e);
                        outputs.emit(StudioEvent::Rejected { message: e.to_string() });
                    }
                }
            }

            _ = frames.tick(), if studio.needs_frames() => {
                // The interval hands back its scheduled deadline, which is stale after
                // the branch sat disabled; measure against the real instant instead.
                let now = Instant::now();
                let delta = frame_clock.delta(now);
                let event = studio.advance(delta);
                outputs.publish(&studio, now);

                if let Some(event) = event {
                    info!("Studio event: {:?}", event);
                    outputs.emit(event);
                }
            }

            _ = seconds.tick(), if studio.shows_wall_clock() => {
                if studio.refresh_wall_clock(Local::now().naive_local()) {
                    outputs.publish(&studio, Instant::now());
                }
            }
        }
    }

    debug!("Frame driver ran {} frames", frame_clock.frame_count());
}
