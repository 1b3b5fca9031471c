//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a role" or "rename a role".

pub mod role_service;

pub use role_service::{RoleInfo, RoleLifecycleService};
