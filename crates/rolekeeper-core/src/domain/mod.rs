// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Rolekeeper.
//!
//! This module contains pure business logic. All I/O (persistence,
//! notifications) is handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std + thiserror + serde + chrono (timestamps)
//! - **Immutable entities**: renaming produces a new `Role`
//! - **Checked construction**: `RoleId` and `RoleName` cannot hold invalid values
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod policy;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::role::Role;
pub use error::{ErrorCategory, ValidationError};
pub use policy::{DEFAULT_MAX_LENGTH, NamePolicy};
pub use validation::NameValidator;
pub use value_objects::{RoleId, RoleName};
