//! Clock Studio - A terminal suite of time tools
//!
//! This is the main entry point for the clock-studio application.

use chrono::Local;
use tokio::{sync::mpsc, task::JoinError, time::Instant};
use tracing::{error, info};

use clock_studio::{
    config::Config,
    console::OutputFormat,
    services::ThemeStore,
    state::{Studio, ThemePreference},
    tasks::{frame_driver_task, input_reader_task, renderer_task, Outputs, RenderOptions},
    utils::shutdown_signal,
};

/// Exit code for a joined task, logging the failure if it had one
fn exit_code<T>(task: &str, joined: Result<T, JoinError>) -> i32 {
    match joined {
        Ok(_) => 0,
        Err(e) => {
            error!("{} task failed: {}", task, e);
            1
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the readout
    tracing_subscriber::fmt()
        .with_env_filter(format!("clock_studio={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting clock-studio v1.0.0");
    info!(
        "Configuration: tab={}, base={}m, increment={}s, first to move={}, frame rate={}Hz",
        config.tab, config.base, config.increment, config.first_to_move, config.frame_rate
    );

    let store = ThemeStore::new(config.theme_path());
    let theme = store.load_or(ThemePreference::default()).await;

    let studio = Studio::new(config.tab, theme, config.time_control(), Local::now().naive_local());
    let (outputs, snapshot_rx, event_rx) = Outputs::new(studio.snapshot(Instant::now()));
    let (line_tx, line_rx) = mpsc::channel(32);

    let options = RenderOptions {
        format: if config.json { OutputFormat::Json } else { OutputFormat::Text },
        watch: config.watch,
    };
    let renderer = tokio::spawn(renderer_task(tokio::io::stdout(), snapshot_rx, event_rx, options));
    tokio::spawn(input_reader_task(tokio::io::stdin(), line_tx));

    let mut driver = tokio::spawn(frame_driver_task(
        studio,
        line_rx,
        outputs,
        store,
        config.frame_period(),
    ));

    let mut code = 0;
    tokio::select! {
        result = &mut driver => {
            code = exit_code("frame driver", result);
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            driver.abort();
        }
    }

    // Dropping the driver's channels lets the renderer drain and exit
    code = code.max(exit_code("renderer", renderer.await));

    info!("Shutdown complete");

    // The stdin reader sits in a blocking read that would hold the runtime open
    std::process::exit(code);
}
