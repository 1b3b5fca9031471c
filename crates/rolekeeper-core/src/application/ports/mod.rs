//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `rolekeeper-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RolePort`: Role persistence
//!   - `NotificationPort`: Fire-and-forget change notifications
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `RoleLifecycleService` is used directly by the CLI layer

pub mod output;

pub use output::{NotificationPort, RolePort};

#[cfg(test)]
pub use output::{MockNotificationPort, MockRolePort};
