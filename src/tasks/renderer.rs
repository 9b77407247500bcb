//! Renderer background task

use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::{
        broadcast::{self, error::RecvError},
        watch,
    },
};
use tracing::{debug, info, warn};

use crate::{
    console::OutputFormat,
    state::{StudioEvent, StudioSnapshot},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Print the readout whenever it changes, not only after events
    pub watch: bool,
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

/// Print events and readouts until the frame driver goes away
///
/// Returns the writer so callers can inspect what was rendered.
pub async fn renderer_task<W>(
    mut out: W,
    mut snapshots: watch::Receiver<StudioSnapshot>,
    mut events: broadcast::Receiver<StudioEvent>,
    options: RenderOptions,
) -> W
where
    W: AsyncWrite + Unpin,
{
    info!("Starting renderer");
    let mut last_readout: Option<String> = None;

    loop {
        let mut lines = Vec::new();

        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    lines.extend(options.format.event(&event));

                    let shows_readout = match &event {
                        StudioEvent::Rejected { .. } => false,
                        StudioEvent::Applied { command, .. } => command != "help",
                        _ => true,
                    };
                    if shows_readout {
                        let readout = options.format.snapshot(&snapshots.borrow_and_update());
                        if let Some(readout) = readout {
                            last_readout = Some(readout.clone());
                            lines.push(readout);
                        }
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Renderer lagged, {} events skipped", skipped);
                }
                Err(RecvError::Closed) => {
                    debug!("Event channel closed");
                    break;
                }
            },

            changed = snapshots.changed(), if options.watch => {
                if changed.is_err() {
                    debug!("Snapshot channel closed");
                    break;
                }
                let readout = options.format.snapshot(&snapshots.borrow_and_update());
                if let Some(readout) = readout {
                    if last_readout.as_ref() != Some(&readout) {
                        last_readout = Some(readout.clone());
                        lines.push(readout);
                    }
                }
            }
        }

        for line in lines {
            if let Err(e) = write_line(&mut out, &line).await {
                warn!("Failed to write output: {}", e);
                return out;
            }
        }
    }

    info!("Renderer stopped");
    out
}
