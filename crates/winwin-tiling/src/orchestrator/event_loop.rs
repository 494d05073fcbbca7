//! Request dispatch and the orchestrator's single event loop.

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};
use winwin_common::{Event, WinwinError};

use crate::commands::{Ack, Request};
use crate::platform::HostEvent;

use super::Orchestrator;

/// A request paired with the channel its [`Ack`] goes back on.
#[derive(Debug)]
pub struct Envelope {
    pub request: Request,
    pub reply: oneshot::Sender<Ack>,
}

/// Cloneable sending side of the orchestrator's request queue.
#[derive(Debug, Clone)]
pub struct OrchestratorHandle {
    tx: mpsc::Sender<Envelope>,
}

impl OrchestratorHandle {
    /// Create a handle and the receiver to pass to [`Orchestrator::run`].
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Envelope>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Queue a request and wait for its completion signal.
    pub async fn send(&self, request: Request) -> Result<Ack, WinwinError> {
        let (reply, ack) = oneshot::channel();
        self.tx
            .send(Envelope { request, reply })
            .await
            .map_err(|_| WinwinError::Other("orchestrator is not running".into()))?;
        ack.await
            .map_err(|_| WinwinError::Other("orchestrator dropped the request".into()))
    }
}

impl Orchestrator {
    /// Run one request to completion. Failures are logged here and turned
    /// into a failed [`Ack`]; the caller is answered either way.
    pub async fn handle(&self, request: Request) -> Ack {
        let result = match request {
            Request::SplitTabs => self.split().await.map(|_| ()),
            Request::MergeWindows => self.merge().await.map(|_| ()),
            Request::CheckWindowState => {
                self.notify_window_state().await;
                Ok(())
            }
        };

        match result {
            Ok(()) => Ack::ok(request),
            Err(e) => {
                error!(?request, error = %e, "request failed");
                Ack::failed(request, e.to_string())
            }
        }
    }

    /// React to a host lifecycle event: the badge follows every tab or
    /// window change, button states follow window changes.
    pub async fn on_host_event(&self, event: &HostEvent) {
        debug!(?event, "host event");
        self.refresh_badge().await;
        if event.affects_windows() {
            self.notify_window_state().await;
        }
    }

    /// Initial badge and button state.
    pub async fn startup(&self) {
        self.refresh_badge().await;
        self.notify_window_state().await;
    }

    /// Serve requests, host events, and the badge fallback timer until the
    /// request channel closes. Requests are handled one at a time, in order.
    pub async fn run(&self, mut requests: mpsc::Receiver<Envelope>) {
        let mut host_events = self.host.subscribe();
        let mut ticker = tokio::time::interval(self.settings.badge_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.startup().await;
        info!("orchestrator running");

        loop {
            tokio::select! {
                envelope = requests.recv() => {
                    let Some(Envelope { request, reply }) = envelope else {
                        info!("request channel closed, stopping orchestrator");
                        break;
                    };
                    let ack = self.handle(request).await;
                    if reply.send(ack).is_err() {
                        debug!(?request, "requester went away before completion");
                    }
                }
                event = host_events.recv() => match event {
                    Ok(event) => self.on_host_event(&event).await,
                    Err(RecvError::Lagged(n)) => {
                        warn!("host events lagged by {n}, resyncing");
                        self.startup().await;
                    }
                    Err(RecvError::Closed) => {
                        info!("host event stream closed, stopping orchestrator");
                        break;
                    }
                },
                _ = ticker.tick() => {
                    self.refresh_badge().await;
                }
            }
        }

        self.bus.publish(Event::Shutdown);
    }
}
