//! Application layer for Rolekeeper.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`RoleLifecycleService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Dispatch**: The background queue in front of the notification port
//! - **Errors**: Port-level error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. Those live in `crate::domain`.

pub mod dispatch;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    RoleInfo, // DTO for display
    RoleLifecycleService,
};

pub use dispatch::{DispatchReport, NotificationDispatcher, RoleEvent};

// Re-export port traits (for adapter implementation)
pub use ports::{NotificationPort, RolePort};

pub use error::{NotificationError, RepositoryError};
