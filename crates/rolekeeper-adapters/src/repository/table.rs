//! Id assignment, uniqueness and search over a set of roles.

use std::collections::BTreeMap;

use rolekeeper_core::{
    application::RepositoryError,
    domain::{Role, RoleId, RoleName},
};

/// Rows keyed by id, iterated in id order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RoleTable {
    last_id: i64,
    rows: BTreeMap<RoleId, Role>,
}

impl RoleTable {
    /// Rebuild a table from stored rows.
    ///
    /// `last_id` never moves backwards, so ids of deleted roles are not
    /// handed out again.
    pub(crate) fn from_rows(
        last_id: i64,
        rows: impl IntoIterator<Item = Role>,
    ) -> Result<Self, RepositoryError> {
        let mut table = Self {
            last_id: last_id.max(0),
            rows: BTreeMap::new(),
        };
        for role in rows {
            let Some(id) = role.id() else {
                return Err(RepositoryError::Corrupted {
                    reason: format!("stored role '{}' has no id", role.name()),
                });
            };
            if table.find_by_name(role.name()).is_some() || table.rows.contains_key(&id) {
                return Err(RepositoryError::Corrupted {
                    reason: format!("duplicate stored role {role}"),
                });
            }
            table.last_id = table.last_id.max(id.get());
            table.rows.insert(id, role);
        }
        Ok(table)
    }

    pub(crate) const fn last_id(&self) -> i64 {
        self.last_id
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &Role> {
        self.rows.values()
    }

    /// Insert or replace. Assigns the next id to unsaved roles.
    ///
    /// A role carrying an id must still have its row: a deleted role is never
    /// written back.
    pub(crate) fn save(&mut self, role: Role) -> Result<Role, RepositoryError> {
        if let Some(id) = role.id()
            && !self.rows.contains_key(&id)
        {
            return Err(RepositoryError::Missing { id });
        }
        self.ensure_name_free(&role)?;

        let role = match role.id() {
            Some(_) => role,
            None => role.assign_id(self.next_id()?),
        };
        self.put(role)
    }

    /// Load a role from outside the lifecycle, keeping its id if it has one.
    pub(crate) fn seed(&mut self, role: Role) -> Result<Role, RepositoryError> {
        let Some(id) = role.id() else {
            return self.save(role);
        };
        self.ensure_name_free(&role)?;
        if self.rows.contains_key(&id) {
            return Err(RepositoryError::Corrupted {
                reason: format!("seeded role {role} reuses an id"),
            });
        }
        self.last_id = self.last_id.max(id.get());
        self.put(role)
    }

    fn ensure_name_free(&self, role: &Role) -> Result<(), RepositoryError> {
        match self.find_by_name(role.name()) {
            Some(holder) if holder.id() != role.id() => Err(RepositoryError::Conflict {
                name: role.name().to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn put(&mut self, role: Role) -> Result<Role, RepositoryError> {
        let id = role.id().ok_or_else(|| RepositoryError::Corrupted {
            reason: format!("role {role} has no id"),
        })?;
        self.rows.insert(id, role.clone());
        Ok(role)
    }

    pub(crate) fn find_by_id(&self, id: RoleId) -> Option<&Role> {
        self.rows.get(&id)
    }

    pub(crate) fn find_by_name(&self, name: &RoleName) -> Option<&Role> {
        self.rows.values().find(|role| role.name() == name)
    }

    /// Case-insensitive substring match.
    pub(crate) fn find_by_name_containing(&self, pattern: &str) -> Vec<Role> {
        let needle = pattern.to_lowercase();
        self.rows
            .values()
            .filter(|role| role.name().as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub(crate) fn remove(&mut self, id: RoleId) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    fn next_id(&mut self) -> Result<RoleId, RepositoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Unavailable {
                reason: "role id sequence exhausted".into(),
            })?;
        let id = RoleId::new(next).map_err(|e| RepositoryError::Corrupted {
            reason: e.to_string(),
        })?;
        self.last_id = next;
        Ok(id)
    }
}
