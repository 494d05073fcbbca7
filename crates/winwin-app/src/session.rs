//! JSON-lines session: requests in, acks and broadcasts out.

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc};
use winwin_common::{Event, WinwinError};
use winwin_tiling::{Broadcast, OrchestratorHandle, Request};

/// Reply to a line that was not a valid request.
#[derive(Debug, Serialize)]
struct InvalidRequest {
    error: String,
}

fn encode<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(line) => Some(line),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode output line");
            None
        }
    }
}

/// Forward button-state broadcasts to `out` until the orchestrator shuts
/// down or the writer goes away.
pub async fn forward_broadcasts(mut events: broadcast::Receiver<Event>, out: mpsc::Sender<String>) {
    loop {
        match events.recv().await {
            Ok(Event::Shutdown) => break,
            Ok(event) => {
                let Some(line) = Broadcast::from_event(&event).and_then(|b| encode(&b)) else {
                    continue;
                };
                if out.send(line).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("broadcast forwarder lagged by {n} events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Write each queued line to `writer`, flushing after every line.
pub async fn write_lines<W>(mut rx: mpsc::Receiver<String>, mut writer: W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Read requests line by line, send each through `handle` and queue its
/// ack. Returns when input ends; dropping `handle` then stops the
/// orchestrator.
pub async fn serve<R>(
    reader: R,
    handle: OrchestratorHandle,
    out: mpsc::Sender<String>,
) -> Result<usize, WinwinError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut served = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                tracing::debug!(?request, "request received");
                served += 1;
                encode(&handle.send(request).await?)
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed request");
                encode(&InvalidRequest {
                    error: format!("invalid request: {e}"),
                })
            }
        };

        if let Some(reply) = reply {
            if out.send(reply).await.is_err() {
                break;
            }
        }
    }

    Ok(served)
}
