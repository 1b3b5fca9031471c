//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rolekeeper-adapters` crate provides implementations.

use crate::application::{NotificationError, RepositoryError};
use crate::domain::{Role, RoleId, RoleName};

/// Port for role persistence.
///
/// Implemented by:
/// - `rolekeeper_adapters::repository::InMemoryRoleRepository` (testing, embedding)
/// - `rolekeeper_adapters::repository::JsonFileRoleRepository` (CLI storage)
///
/// ## Design Notes
///
/// - Synchronous: the service blocks on these calls
/// - The store is the final authority on name uniqueness; `save` reports a
///   clash as [`RepositoryError::Conflict`]
/// - `save` assigns an id on first save and keeps it afterwards
#[cfg_attr(test, mockall::automock)]
pub trait RolePort: Send + Sync {
    /// Insert or update a role, returning the stored value.
    fn save(&self, role: Role) -> Result<Role, RepositoryError>;

    /// Get a role by id.
    fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RepositoryError>;

    /// Get a role by its normalized name.
    fn find_by_name(&self, name: &RoleName) -> Result<Option<Role>, RepositoryError>;

    /// List all roles.
    fn find_all(&self) -> Result<Vec<Role>, RepositoryError>;

    /// Roles whose name contains `pattern`, compared case-insensitively.
    fn find_by_name_containing(&self, pattern: &str) -> Result<Vec<Role>, RepositoryError>;

    /// Whether a role with this normalized name exists.
    fn exists_by_name(&self, name: &RoleName) -> Result<bool, RepositoryError>;

    /// Remove a role. `true` iff something was removed.
    fn delete_by_id(&self, id: RoleId) -> Result<bool, RepositoryError>;

    /// Total number of roles.
    fn count(&self) -> Result<u64, RepositoryError>;
}

/// Port for role change notifications.
///
/// Implemented by:
/// - `rolekeeper_adapters::notification::LoggingNotifier` (tracing events)
/// - `rolekeeper_adapters::notification::RecordingNotifier` (testing)
///
/// Calls run on a background worker, never on the caller's path. Errors are
/// logged by the dispatcher and otherwise ignored.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify_role_created(&self, role: &Role) -> Result<(), NotificationError>;

    fn notify_role_updated(&self, role: &Role) -> Result<(), NotificationError>;

    fn notify_role_deleted(&self, id: RoleId) -> Result<(), NotificationError>;
}
