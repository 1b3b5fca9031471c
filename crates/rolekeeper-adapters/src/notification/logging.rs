//! Notifier that turns role changes into `tracing` events.

use rolekeeper_core::{
    application::{NotificationError, ports::NotificationPort},
    domain::{Role, RoleId},
};
use tracing::info;

/// Emits one `info` event per change under the `rolekeeper::notify` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationPort for LoggingNotifier {
    fn notify_role_created(&self, role: &Role) -> Result<(), NotificationError> {
        info!(
            target: "rolekeeper::notify",
            event = "role.created",
            id = role.id().map(RoleId::get),
            name = %role.name(),
            "Role created"
        );
        Ok(())
    }

    fn notify_role_updated(&self, role: &Role) -> Result<(), NotificationError> {
        info!(
            target: "rolekeeper::notify",
            event = "role.updated",
            id = role.id().map(RoleId::get),
            name = %role.name(),
            "Role updated"
        );
        Ok(())
    }

    fn notify_role_deleted(&self, id: RoleId) -> Result<(), NotificationError> {
        info!(
            target: "rolekeeper::notify",
            event = "role.deleted",
            id = id.get(),
            "Role deleted"
        );
        Ok(())
    }
}
