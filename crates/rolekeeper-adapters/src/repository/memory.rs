//! In-memory role repository.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rolekeeper_core::{
    application::{RepositoryError, ports::RolePort},
    domain::{Role, RoleId, RoleName},
};
use tracing::debug;

use super::table::RoleTable;

/// Thread-safe in-memory role store.
///
/// Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryRoleRepository {
    inner: Arc<RwLock<RoleTable>>,
}

impl InMemoryRoleRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `roles`.
    ///
    /// This bypasses the name policy, so it is how system roles such as
    /// `SYSTEM` get into a store. Unsaved roles receive the next id.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Result<Self, RepositoryError> {
        let store = Self::new();
        {
            let mut table = store.write()?;
            for role in roles {
                table.seed(role)?;
            }
        }
        Ok(store)
    }

    /// Get the number of roles.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    /// Remove all roles. The id sequence keeps counting.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RoleTable>, RepositoryError> {
        self.inner.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RoleTable>, RepositoryError> {
        self.inner.write().map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl RolePort for InMemoryRoleRepository {
    fn save(&self, role: Role) -> Result<Role, RepositoryError> {
        let saved = self.write()?.save(role)?;
        debug!(role = %saved, "Stored role in memory");
        Ok(saved)
    }

    fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RepositoryError> {
        Ok(self.read()?.find_by_id(id).cloned())
    }

    fn find_by_name(&self, name: &RoleName) -> Result<Option<Role>, RepositoryError> {
        Ok(self.read()?.find_by_name(name).cloned())
    }

    fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        Ok(self.read()?.rows().cloned().collect())
    }

    fn find_by_name_containing(&self, pattern: &str) -> Result<Vec<Role>, RepositoryError> {
        Ok(self.read()?.find_by_name_containing(pattern))
    }

    fn exists_by_name(&self, name: &RoleName) -> Result<bool, RepositoryError> {
        Ok(self.read()?.find_by_name(name).is_some())
    }

    fn delete_by_id(&self, id: RoleId) -> Result<bool, RepositoryError> {
        let removed = self.write()?.remove(id);
        debug!(%id, removed, "Delete from memory");
        Ok(removed)
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.read()?.len() as u64)
    }
}
