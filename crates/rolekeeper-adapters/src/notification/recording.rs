//! Notifier that keeps what it was told, for tests and embedding.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use rolekeeper_core::{
    application::{NotificationError, ports::NotificationPort},
    domain::{Role, RoleId},
};

/// A notification as the port received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Created { id: Option<i64>, name: String },
    Updated { id: Option<i64>, name: String },
    Deleted { id: i64 },
}

/// Records notifications in memory.
///
/// Clones share the same log, so a test can keep one handle and give
/// another to the service. In failing mode every call returns an error and
/// records nothing.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails.
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.set_failing(true);
        notifier
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn record(&self, notification: Notification) -> Result<(), NotificationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Delivery {
                reason: "recording notifier set to fail".into(),
            });
        }
        self.log
            .lock()
            .map_err(|_| NotificationError::Delivery {
                reason: "notification log poisoned".into(),
            })?
            .push(notification);
        Ok(())
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify_role_created(&self, role: &Role) -> Result<(), NotificationError> {
        self.record(Notification::Created {
            id: role.id().map(RoleId::get),
            name: role.name().to_string(),
        })
    }

    fn notify_role_updated(&self, role: &Role) -> Result<(), NotificationError> {
        self.record(Notification::Updated {
            id: role.id().map(RoleId::get),
            name: role.name().to_string(),
        })
    }

    fn notify_role_deleted(&self, id: RoleId) -> Result<(), NotificationError> {
        self.record(Notification::Deleted { id: id.get() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();
        notifier
            .notify_role_deleted(RoleId::new(3).unwrap())
            .unwrap();
        assert_eq!(handle.notifications(), vec![Notification::Deleted { id: 3 }]);
    }

    #[test]
    fn failing_mode_records_nothing() {
        let notifier = RecordingNotifier::failing();
        assert!(
            notifier
                .notify_role_deleted(RoleId::new(1).unwrap())
                .is_err()
        );
        assert!(notifier.notifications().is_empty());

        notifier.set_failing(false);
        assert!(
            notifier
                .notify_role_deleted(RoleId::new(1).unwrap())
                .is_ok()
        );
    }
}
