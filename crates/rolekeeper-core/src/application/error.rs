//! Port-level errors.
//!
//! These errors are reported by adapters through the driven ports. The
//! lifecycle service translates them into `RoleError` (repository) or absorbs
//! them (notification).

use thiserror::Error;

use crate::domain::{ErrorCategory, RoleId};

/// Failures reported by a [`RolePort`](crate::application::ports::RolePort).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store's own uniqueness constraint rejected the write.
    #[error("a role named '{name}' is already stored")]
    Conflict { name: String },

    /// An update targeted a role that is no longer stored.
    #[error("role {id} is no longer stored")]
    Missing { id: RoleId },

    /// Backing store could not be reached or written.
    #[error("role store unavailable: {reason}")]
    Unavailable { reason: String },

    /// Stored data could not be decoded.
    #[error("role store is corrupted: {reason}")]
    Corrupted { reason: String },

    /// In-process store lock poisoned by a panicking writer.
    #[error("role store lock poisoned")]
    LockPoisoned,
}

impl RepositoryError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Conflict { name } => vec![
                format!("Another role already uses the name '{name}'"),
                "Choose a different name".into(),
            ],
            Self::Missing { id } => vec![
                format!("Role {id} was deleted before the change was written"),
                "Try: rolekeeper list".into(),
            ],
            Self::Unavailable { reason } => vec![
                format!("Storage problem: {reason}"),
                "Check that the storage path exists and is writable".into(),
                "Try again in a moment".into(),
            ],
            Self::Corrupted { .. } => vec![
                "The role store could not be read".into(),
                "Restore it from a backup or move it aside to start fresh".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::Missing { .. } => ErrorCategory::NotFound,
            Self::Unavailable { .. } | Self::Corrupted { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }

    /// Failures that may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::LockPoisoned)
    }
}

/// Failures reported by a
/// [`NotificationPort`](crate::application::ports::NotificationPort).
///
/// Never surfaced to callers of the lifecycle service; only logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification delivery failed: {reason}")]
    Delivery { reason: String },
}
