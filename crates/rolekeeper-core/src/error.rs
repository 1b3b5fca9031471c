//! Unified error handling for Rolekeeper Core.
//!
//! [`RoleError`] is the taxonomy every lifecycle operation reports. Each
//! variant maps to exactly one [`ErrorCategory`]; callers (the CLI, or an
//! HTTP layer) turn categories into exit codes or status codes.

use std::fmt;

use thiserror::Error;

use crate::application::RepositoryError;
use crate::domain::{RoleId, ValidationError};

pub use crate::domain::ErrorCategory;

/// Root error type for role lifecycle operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoleError {
    /// Malformed, blank, too-long or reserved name; blank pattern; bad id.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No role matches the lookup.
    #[error("Role {0} not found")]
    NotFound(RoleLookup),

    /// Name collision on create or update.
    #[error("A role named '{name}' already exists")]
    AlreadyExists { name: String },

    /// Attempted mutation of a system role.
    #[error("'{name}' is a system role and cannot be {action}")]
    Forbidden { name: String, action: Mutation },

    /// Unexpected backing-store failure.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(#[source] RepositoryError),
}

impl From<RepositoryError> for RoleError {
    /// A store-level uniqueness violation means the same thing as the
    /// service's own pre-check failing; a row deleted under a pending update
    /// means the role is gone.
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict { name } => Self::AlreadyExists { name },
            RepositoryError::Missing { id } => Self::NotFound(RoleLookup::Id(id)),
            other => Self::PersistenceFailure(other),
        }
    }
}

impl RoleError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput(e) => e.suggestions(),
            Self::NotFound(lookup) => vec![
                format!("No role matches {lookup}"),
                "Try: rolekeeper list".into(),
            ],
            Self::AlreadyExists { name } => vec![
                format!("'{name}' is taken; names are compared after normalization"),
                "Names are upper-cased and whitespace-collapsed before comparison".into(),
                "Choose a different name".into(),
            ],
            Self::Forbidden { name, .. } => vec![
                format!("'{name}' is protected by the name policy"),
                "System roles can be read and listed, but not changed".into(),
            ],
            Self::PersistenceFailure(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_) => ErrorCategory::Validation,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::Forbidden { .. } => ErrorCategory::Forbidden,
            Self::PersistenceFailure(_) => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceFailure(e) if e.is_transient())
    }
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleLookup {
    Id(RoleId),
    Name(String),
}

impl fmt::Display for RoleLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Mutations that system roles refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Update,
    Delete,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Update => "updated",
            Self::Delete => "deleted",
        })
    }
}

/// Convenient result type alias.
pub type RoleResult<T> = Result<T, RoleError>;
