//! Console input background task

use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    sync::mpsc,
};
use tracing::{debug, error, info};

/// Forward each input line to the frame driver; end of input becomes `quit`
pub async fn input_reader_task<R>(reader: R, tx: mpsc::Sender<String>)
where
    R: AsyncRead + Unpin,
{
    info!("Starting input reader");

    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if tx.send(line).await.is_err() {
                    debug!("Frame driver stopped, input reader exiting");
                    return;
                }
            }
            Ok(None) => {
                info!("End of input");
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    if let Err(e) = tx.send("quit".to_string()).await {
        debug!("Quit not delivered: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_lines_then_quits() {
        let (tx, mut rx) = mpsc::channel(8);
        input_reader_task(&b"tab chess\nstart\n"[..], tx).await;

        assert_eq!(rx.recv().await.as_deref(), Some("tab chess"));
        assert_eq!(rx.recv().await.as_deref(), Some("start"));
        assert_eq!(rx.recv().await.as_deref(), Some("quit"));
        assert_eq!(rx.recv().await, None);
    }
}
