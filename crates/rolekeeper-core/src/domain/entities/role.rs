//! The `Role` aggregate root.
//!
//! A `Role` is a named permission/group label. Its name is always a
//! [`RoleName`], so every `Role` in memory is already normalized; policy
//! checks (length, reserved names) happen before construction in the
//! validator.
//!
//! # Lifecycle
//!
//! ```text
//! Unpersisted ──save──▶ Persisted ──update──▶ Persisted
//!                           │
//!                           └──delete──▶ (gone)
//! ```
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RoleId, RoleName};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A named role.
///
/// Equality and hashing use `id` and `name` only: two values with the same
/// pair are interchangeable regardless of `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    id: Option<RoleId>,
    name: RoleName,
    created_at: DateTime<Utc>,
}

impl Role {
    /// A fresh, unpersisted role.
    pub fn new(name: RoleName, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name,
            created_at,
        }
    }

    /// Rebuild a persisted role from storage.
    pub fn restore(id: RoleId, name: RoleName, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            name,
            created_at,
        }
    }

    pub const fn id(&self) -> Option<RoleId> {
        self.id
    }
    pub fn name(&self) -> &RoleName {
        &self.name
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Same id and creation time, new name.
    pub fn with_name(&self, name: RoleName) -> Self {
        Self {
            id: self.id,
            name,
            created_at: self.created_at,
        }
    }

    /// Attach the repository-assigned id.
    ///
    /// Ids are assigned exactly once: if this role already has one, it is
    /// kept and `id` is ignored.
    pub fn assign_id(mut self, id: RoleId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} (#{id})", self.name),
            None => write!(f, "{} (unsaved)", self.name),
        }
    }
}
