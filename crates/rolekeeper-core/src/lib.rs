//! Rolekeeper Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Rolekeeper, a
//! role lifecycle service, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         rolekeeper-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │        (RoleLifecycleService)           │
//! │  Orchestrates Use Cases, queues events  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │   (Driven: RolePort, NotificationPort)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rolekeeper-adapters (Infrastructure) │
//! │  (InMemory/JsonFile repos, notifiers)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Role, RoleName, NamePolicy, Validator) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rolekeeper_core::prelude::*;
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let service = RoleLifecycleService::new(
//!     repository, // Box<dyn RolePort>
//!     NotificationDispatcher::start(notifier, runtime.handle()),
//!     NameValidator::default(),
//! );
//!
//! let role = service.create("  ops team ")?;
//! assert_eq!(role.name().as_str(), "OPS TEAM");
//!
//! let report = runtime.block_on(service.shutdown());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DispatchReport, NotificationDispatcher, RoleInfo, RoleLifecycleService,
        error::{NotificationError, RepositoryError},
        ports::{NotificationPort, RolePort},
    };
    pub use crate::domain::{NamePolicy, NameValidator, Role, RoleId, RoleName, ValidationError};
    pub use crate::error::{ErrorCategory, Mutation, RoleError, RoleLookup, RoleResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
