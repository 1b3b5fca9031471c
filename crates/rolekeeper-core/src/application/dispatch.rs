//! Fire-and-forget notification dispatch.
//!
//! The lifecycle service hands every change event to a
//! [`NotificationDispatcher`]. Dispatching only pushes onto an unbounded
//! channel, so it never blocks and never fails the caller. A single worker
//! task drains the channel in order and calls the [`NotificationPort`] on
//! tokio's blocking pool, because port implementations are synchronous.
//!
//! Delivery errors and panics stay inside the worker: they are logged and
//! counted in the [`DispatchReport`], nothing more.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::application::{NotificationError, ports::NotificationPort};
use crate::domain::{Role, RoleId};

/// A role change to announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleEvent {
    Created(Role),
    Updated(Role),
    Deleted(RoleId),
}

impl RoleEvent {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created(_) => "role.created",
            Self::Updated(_) => "role.updated",
            Self::Deleted(_) => "role.deleted",
        }
    }

    fn deliver(&self, port: &dyn NotificationPort) -> Result<(), NotificationError> {
        match self {
            Self::Created(role) => port.notify_role_created(role),
            Self::Updated(role) => port.notify_role_updated(role),
            Self::Deleted(id) => port.notify_role_deleted(*id),
        }
    }
}

/// Outcome counts, available once the dispatcher has shut down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// The port accepted the notification.
    pub delivered: u64,
    /// The port returned an error or panicked.
    pub failed: u64,
    /// The queue was already closed when the event was dispatched.
    pub dropped: u64,
}

/// Background queue in front of a [`NotificationPort`].
pub struct NotificationDispatcher {
    tx: mpsc::UnboundedSender<RoleEvent>,
    worker: JoinHandle<DispatchReport>,
    dropped: AtomicU64,
}

impl NotificationDispatcher {
    /// Spawn the worker on `runtime` and return the sending side.
    pub fn start(port: Arc<dyn NotificationPort>, runtime: &Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = runtime.spawn(drain(rx, port));

        Self {
            tx,
            worker,
            dropped: AtomicU64::new(0),
        }
    }

    /// Queue an event. Never blocks, never fails.
    pub fn dispatch(&self, event: RoleEvent) {
        let kind = event.kind();
        match self.tx.send(event) {
            Ok(()) => debug!(event = kind, "Notification queued"),
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(event = kind, "Notification queue closed, event dropped");
            }
        }
    }

    /// Close the queue and wait for queued events to be handled.
    pub async fn shutdown(self) -> DispatchReport {
        let Self {
            tx,
            worker,
            dropped,
        } = self;
        drop(tx);

        let mut report = match worker.await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Notification worker stopped abnormally");
                DispatchReport::default()
            }
        };
        report.dropped = dropped.into_inner();
        report
    }
}

async fn drain(
    mut rx: mpsc::UnboundedReceiver<RoleEvent>,
    port: Arc<dyn NotificationPort>,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    while let Some(event) = rx.recv().await {
        let kind = event.kind();
        let port = Arc::clone(&port);

        match tokio::task::spawn_blocking(move || event.deliver(port.as_ref())).await {
            Ok(Ok(())) => {
                report.delivered += 1;
                debug!(event = kind, "Notification delivered");
            }
            Ok(Err(e)) => {
                report.failed += 1;
                error!(event = kind, error = %e, "Notification failed");
            }
            Err(e) => {
                report.failed += 1;
                error!(event = kind, error = %e, "Notification handler panicked");
            }
        }
    }

    report
}
