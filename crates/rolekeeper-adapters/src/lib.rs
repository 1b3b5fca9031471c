//! Infrastructure adapters for Rolekeeper.
//!
//! This crate implements the ports defined in `rolekeeper-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod notification;
pub mod repository;

// Re-export commonly used adapters
pub use notification::{LoggingNotifier, Notification, RecordingNotifier};
pub use repository::{InMemoryRoleRepository, JsonFileRoleRepository};
