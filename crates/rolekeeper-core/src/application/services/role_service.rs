//! Role Lifecycle Service - the use cases of the system.
//!
//! This service coordinates every operation on roles:
//! 1. Normalize and validate raw input
//! 2. Check uniqueness and system-role protection against the store
//! 3. Persist through the [`RolePort`]
//! 4. Hand a change event to the notification queue
//!
//! It is the driving port (incoming) and uses the driven ports (outgoing).

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        dispatch::{DispatchReport, NotificationDispatcher, RoleEvent},
        ports::RolePort,
    },
    domain::{NameValidator, Role, RoleId},
    error::{Mutation, RoleError, RoleLookup, RoleResult},
};

/// Information about a role for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub id: Option<i64>,
    pub name: String,
    pub created_at: String,
    pub system: bool,
}

/// Main role service.
///
/// Holds no mutable state of its own; every decision is made from the
/// arguments, the injected policy and what the store reports.
pub struct RoleLifecycleService {
    repository: Box<dyn RolePort>,
    notifications: NotificationDispatcher,
    validator: NameValidator,
}

impl RoleLifecycleService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use rolekeeper_core::application::{NotificationDispatcher, RoleLifecycleService};
    /// use rolekeeper_core::domain::NameValidator;
    ///
    /// let runtime = tokio::runtime::Runtime::new()?;
    /// let dispatcher = NotificationDispatcher::start(notifier, runtime.handle());
    /// let service = RoleLifecycleService::new(
    ///     repository, // Box<dyn RolePort>
    ///     dispatcher,
    ///     NameValidator::default(),
    /// );
    /// ```
    pub fn new(
        repository: Box<dyn RolePort>,
        notifications: NotificationDispatcher,
        validator: NameValidator,
    ) -> Self {
        Self {
            repository,
            notifications,
            validator,
        }
    }

    pub fn validator(&self) -> &NameValidator {
        &self.validator
    }

    /// Create a role from a raw name.
    #[instrument(skip_all, fields(raw_name = %raw_name))]
    pub fn create(&self, raw_name: &str) -> RoleResult<Role> {
        let name = self.validator.normalize_and_validate(raw_name)?;

        if self.repository.exists_by_name(&name)? {
            warn!(name = %name, "Create rejected: name taken");
            return Err(RoleError::AlreadyExists {
                name: name.into_inner(),
            });
        }

        let saved = self.repository.save(Role::new(name, Utc::now()))?;
        info!(role = %saved, "Role created");

        self.notifications
            .dispatch(RoleEvent::Created(saved.clone()));
        Ok(saved)
    }

    /// Rename an existing role. The id and creation time are kept.
    #[instrument(skip_all, fields(id = %id, raw_name = %raw_name))]
    pub fn update(&self, id: RoleId, raw_name: &str) -> RoleResult<Role> {
        let existing = self.load(id)?;
        self.ensure_mutable(&existing, Mutation::Update)?;

        let name = self.validator.normalize_and_validate(raw_name)?;

        if let Some(holder) = self.repository.find_by_name(&name)?
            && holder.id() != Some(id)
        {
            warn!(name = %name, holder = %holder, "Update rejected: name taken");
            return Err(RoleError::AlreadyExists {
                name: name.into_inner(),
            });
        }

        let saved = self.repository.save(existing.with_name(name))?;
        info!(previous = %existing.name(), role = %saved, "Role updated");

        self.notifications
            .dispatch(RoleEvent::Updated(saved.clone()));
        Ok(saved)
    }

    /// Delete a role. Deletion is permanent.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: RoleId) -> RoleResult<()> {
        let existing = self.load(id)?;
        self.ensure_mutable(&existing, Mutation::Delete)?;

        if !self.repository.delete_by_id(id)? {
            // Removed by someone else between the load and the delete.
            warn!("Delete found nothing to remove");
            return Err(RoleError::NotFound(RoleLookup::Id(id)));
        }
        info!(role = %existing, "Role deleted");

        self.notifications.dispatch(RoleEvent::Deleted(id));
        Ok(())
    }

    /// Get a role by id.
    pub fn get_by_id(&self, id: RoleId) -> RoleResult<Role> {
        self.load(id)
    }

    /// Get a role by name. Any spelling that normalizes to the stored name
    /// matches, system roles included.
    pub fn get_by_name(&self, raw_name: &str) -> RoleResult<Role> {
        let name = self.validator.normalize_for_lookup(raw_name)?;
        self.repository
            .find_by_name(&name)?
            .ok_or_else(|| RoleError::NotFound(RoleLookup::Name(name.into_inner())))
    }

    /// All roles, in store order.
    pub fn list(&self) -> RoleResult<Vec<Role>> {
        Ok(self.repository.find_all()?)
    }

    /// Roles whose name contains `pattern`, ignoring case.
    pub fn search_by_name(&self, pattern: &str) -> RoleResult<Vec<Role>> {
        let pattern = self.validator.validate_pattern(pattern)?;
        Ok(self.repository.find_by_name_containing(&pattern)?)
    }

    pub fn count(&self) -> RoleResult<u64> {
        Ok(self.repository.count()?)
    }

    pub fn exists(&self, raw_name: &str) -> RoleResult<bool> {
        let name = self.validator.normalize_for_lookup(raw_name)?;
        Ok(self.repository.exists_by_name(&name)?)
    }

    /// Display-friendly view of a role.
    pub fn describe(&self, role: &Role) -> RoleInfo {
        RoleInfo {
            id: role.id().map(RoleId::get),
            name: role.name().to_string(),
            created_at: role
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            system: self.validator.is_system(role.name()),
        }
    }

    /// Stop accepting notifications and wait for queued ones to finish.
    pub async fn shutdown(self) -> DispatchReport {
        let report = self.notifications.shutdown().await;
        info!(
            delivered = report.delivered,
            failed = report.failed,
            dropped = report.dropped,
            "Notification queue drained"
        );
        report
    }

    fn load(&self, id: RoleId) -> RoleResult<Role> {
        self.repository
            .find_by_id(id)?
            .ok_or(RoleError::NotFound(RoleLookup::Id(id)))
    }

    fn ensure_mutable(&self, role: &Role, action: Mutation) -> RoleResult<()> {
        if self.validator.is_system(role.name()) {
            warn!(role = %role, %action, "Mutation of system role refused");
            return Err(RoleError::Forbidden {
                name: role.name().to_string(),
                action,
            });
        }
        Ok(())
    }
}
